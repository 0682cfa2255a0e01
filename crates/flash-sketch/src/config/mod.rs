mod config;
mod sound_config;
mod timer_config;
mod window_config;

pub(crate) use {
    config::Config, sound_config::SoundConfig, timer_config::TimerConfig,
    window_config::WindowConfig,
};

pub(crate) const DEFAULT_OBSERVE_SECONDS: u32 = 30;
pub(crate) const DEFAULT_DRAW_SECONDS: u32 = 60;
pub(crate) const DEFAULT_SOUND_ENABLED: bool = true;
pub(crate) const DEFAULT_VOLUME: f32 = 0.5;
pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 960.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;

pub(crate) fn default_observe_seconds() -> u32 {
    DEFAULT_OBSERVE_SECONDS
}

pub(crate) fn default_draw_seconds() -> u32 {
    DEFAULT_DRAW_SECONDS
}

pub(crate) fn default_sound_enabled() -> bool {
    DEFAULT_SOUND_ENABLED
}

pub(crate) fn default_volume() -> f32 {
    DEFAULT_VOLUME
}

pub(crate) fn default_window_width() -> f32 {
    DEFAULT_WINDOW_WIDTH
}

pub(crate) fn default_window_height() -> f32 {
    DEFAULT_WINDOW_HEIGHT
}
