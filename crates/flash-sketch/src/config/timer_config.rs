use crate::{
    AppResult,
    config::{default_draw_seconds, default_observe_seconds},
};

use flash_sketch_core::PhaseDurations;
use serde::{Deserialize, Serialize};

/// Default phase lengths loaded into the idle screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Seconds the reference image is shown.
    #[serde(default = "default_observe_seconds")]
    pub observe_seconds: u32,
    /// Seconds the user draws from memory.
    #[serde(default = "default_draw_seconds")]
    pub draw_seconds: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            observe_seconds: default_observe_seconds(),
            draw_seconds: default_draw_seconds(),
        }
    }
}

impl TimerConfig {
    /// Convert to validated phase durations.
    #[track_caller]
    pub fn durations(&self) -> AppResult<PhaseDurations> {
        Ok(PhaseDurations::from_secs(
            self.observe_seconds,
            self.draw_seconds,
        )?)
    }
}
