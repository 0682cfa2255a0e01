use flash_sketch_core::StretchId;

use std::path::PathBuf;

/// Commands sent from the window and the tick tasks to the session loop.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Use the image at `path` as the reference.
    SelectImage {
        /// Local file chosen by the user.
        path: PathBuf,
    },
    /// Change the observe length before starting.
    SetObserveDuration {
        /// Requested length in seconds.
        seconds: u32,
    },
    /// Change the draw length before starting.
    SetDrawDuration {
        /// Requested length in seconds.
        seconds: u32,
    },
    /// Begin the observe/draw cycle.
    Start,
    /// Pause a running phase or resume a paused one.
    TogglePause,
    /// Leave a paused session and return to the setup screen.
    Exit,
    /// One second elapsed for the given counting stretch.
    Tick {
        /// Stretch the emitting tick task was started for.
        stretch: StretchId,
    },
}
