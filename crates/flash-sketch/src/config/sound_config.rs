use crate::config::{default_sound_enabled, default_volume};

use serde::{Deserialize, Serialize};

/// Cue sound configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundConfig {
    /// Play a cue when a phase starts.
    #[serde(default = "default_sound_enabled")]
    pub enabled: bool,
    /// Cue volume between 0.0 and 1.0.
    #[serde(default = "default_volume")]
    pub volume: f32,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: default_sound_enabled(),
            volume: default_volume(),
        }
    }
}
