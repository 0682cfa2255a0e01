mod player;
pub(crate) mod tone;
mod voice;

pub(crate) use {tone::CueBank, voice::Voice};

pub use player::ChimePlayer;
