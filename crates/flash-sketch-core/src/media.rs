use std::fmt;

use tracing::debug;

/// Sound cue associated with a phase entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Entering the observe phase.
    Observe,
    /// Entering the draw phase.
    Draw,
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cue::Observe => f.write_str("observe"),
            Cue::Draw => f.write_str("draw"),
        }
    }
}

/// Fire-and-forget cue playback.
///
/// Implementations must not block and must swallow their own failures.
/// A trigger that arrives while a cue is still sounding restarts playback.
pub trait MediaTrigger {
    /// Play `cue` from the beginning.
    fn trigger(&self, cue: Cue);
}

impl<M: MediaTrigger + ?Sized> MediaTrigger for Box<M> {
    fn trigger(&self, cue: Cue) {
        (**self).trigger(cue);
    }
}

/// Trigger that plays nothing, for when sound is disabled or unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentTrigger;

impl MediaTrigger for SilentTrigger {
    fn trigger(&self, cue: Cue) {
        debug!(cue = %cue, "Sound disabled, cue skipped");
    }
}
