//! Flash-Sketch Core Library
//!
//! Observe/draw training timer: the phase state machine, cue playback and the
//! local reference image holder.
//!
//! # Example
//!
//! ```no_run
//! use flash_sketch_core::{
//!     CoreResult, PhaseController, PhaseDurations, SilentTrigger, StretchId, TickSource,
//! };
//!
//! struct ManualTicks;
//!
//! impl TickSource for ManualTicks {
//!     type Handle = ();
//!     fn acquire(&mut self, _stretch: StretchId) -> Self::Handle {}
//! }
//!
//! fn main() -> CoreResult<()> {
//!     let durations = PhaseDurations::from_secs(30, 60)?;
//!     let mut controller = PhaseController::new(durations, ManualTicks, SilentTrigger);
//!
//!     controller.select_image("reference.png")?;
//!     controller.start()?;
//!
//!     if let Some(stretch) = controller.active_stretch() {
//!         controller.tick(stretch);
//!     }
//!     println!("{} with {}s left", controller.phase(), controller.time_left());
//!     Ok(())
//! }
//! ```

mod audio;
mod controller;
mod duration;
mod error;
mod image_source;
mod media;
mod phase;
mod ticker;

pub use {
    audio::ChimePlayer,
    controller::{PhaseController, SessionView, TickOutcome},
    duration::{PhaseDurations, PhaseSeconds},
    error::CoreError,
    error::Result as CoreResult,
    image_source::{ImageReference, ImageSource},
    media::{Cue, MediaTrigger, SilentTrigger},
    phase::Phase,
    ticker::{StretchId, TickSource},
};

#[cfg(test)]
mod tests;
