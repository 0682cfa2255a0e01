use crate::{Cue, audio::CueBank};

/// Playback cursor shared between `ChimePlayer::trigger` and the output
/// callback. One cue sounds at a time; a new trigger restarts from zero.
#[derive(Debug, Clone)]
pub(crate) struct Voice {
    cue: Option<Cue>,
    cursor: usize,
    volume: f32,
}

impl Voice {
    pub(crate) fn new(volume: f32) -> Self {
        Self {
            cue: None,
            cursor: 0,
            volume: volume.clamp(0.0, 1.0),
        }
    }

    pub(crate) fn restart(&mut self, cue: Cue) {
        self.cue = Some(cue);
        self.cursor = 0;
    }

    pub(crate) fn is_playing(&self) -> bool {
        self.cue.is_some()
    }

    pub(crate) fn next_sample(&mut self, bank: &CueBank) -> f32 {
        let Some(cue) = self.cue else {
            return 0.0;
        };

        match bank.samples(cue).get(self.cursor) {
            Some(sample) => {
                self.cursor += 1;
                sample * self.volume
            }
            None => {
                self.cue = None;
                self.cursor = 0;
                0.0
            }
        }
    }
}
