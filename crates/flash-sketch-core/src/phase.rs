use std::fmt;

/// The four discrete training states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Waiting for the user to configure and start a session.
    #[default]
    Idle,
    /// The reference image is visible for memorization.
    Observing,
    /// The reference image is hidden and the user draws from memory.
    Drawing,
    /// Countdown suspended; the previous phase is remembered.
    Paused,
}

impl Phase {
    /// Whether a countdown runs in this phase.
    pub fn is_counting(self) -> bool {
        matches!(self, Phase::Observing | Phase::Drawing)
    }

    /// The counting phase that follows this one when its countdown ends.
    pub(crate) fn successor(self) -> Option<Phase> {
        match self {
            Phase::Observing => Some(Phase::Drawing),
            Phase::Drawing => Some(Phase::Observing),
            Phase::Idle | Phase::Paused => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Observing => "observing",
            Phase::Drawing => "drawing",
            Phase::Paused => "paused",
        };
        f.write_str(name)
    }
}
