use crate::Phase;

use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Session and media errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A session was started before any image was selected.
    #[error("Select an image before starting {location}")]
    NoImageSelected {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The current phase does not accept the requested event.
    #[error("Cannot {event} while {from} {location}")]
    InvalidTransition {
        /// Phase the controller was in when the event arrived.
        from: Phase,
        /// Name of the rejected event.
        event: &'static str,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Durations can only be edited while idle.
    #[error("Durations are locked while {phase} {location}")]
    DurationLocked {
        /// Phase the controller was in when the edit arrived.
        phase: Phase,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A phase duration must be at least one second.
    #[error("Phase duration must be a positive number of seconds, got {seconds} {location}")]
    InvalidDuration {
        /// The rejected value.
        seconds: u32,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The selected image file does not exist.
    #[error("Image not found at path: {path:?} {location}")]
    ImageNotFound {
        /// Path to the missing file.
        path: PathBuf,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The selected file could not be read as an image.
    #[error("Image at {path:?} is unreadable: {reason} {location}")]
    ImageUnreadable {
        /// Path to the rejected file.
        path: PathBuf,
        /// Description of the decode failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A cue sound could not be played.
    #[error("Playback error: {reason} {location}")]
    Playback {
        /// Description of the playback failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
