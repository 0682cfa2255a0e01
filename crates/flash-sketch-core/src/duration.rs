use crate::{CoreError, CoreResult, Phase};

use std::{num::NonZeroU32, panic::Location};

use error_location::ErrorLocation;

/// A phase length in whole seconds. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhaseSeconds(NonZeroU32);

impl PhaseSeconds {
    /// Wrap a number of seconds, rejecting zero.
    #[track_caller]
    pub fn new(seconds: u32) -> CoreResult<Self> {
        NonZeroU32::new(seconds)
            .map(Self)
            .ok_or_else(|| CoreError::InvalidDuration {
                seconds,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// The length in seconds.
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

/// Observe and draw lengths used on the next phase entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseDurations {
    /// Length of the observe phase.
    pub observe: PhaseSeconds,
    /// Length of the draw phase.
    pub draw: PhaseSeconds,
}

impl PhaseDurations {
    /// Build from raw seconds, rejecting zero on either side.
    #[track_caller]
    pub fn from_secs(observe: u32, draw: u32) -> CoreResult<Self> {
        Ok(Self {
            observe: PhaseSeconds::new(observe)?,
            draw: PhaseSeconds::new(draw)?,
        })
    }

    /// Seconds to count down when entering `phase`, if it counts at all.
    pub fn for_phase(&self, phase: Phase) -> Option<u32> {
        match phase {
            Phase::Observing => Some(self.observe.get()),
            Phase::Drawing => Some(self.draw.get()),
            Phase::Idle | Phase::Paused => None,
        }
    }
}
