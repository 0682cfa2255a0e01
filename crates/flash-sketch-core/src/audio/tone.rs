use crate::Cue;

use std::f32::consts::TAU;

/// Length of the observe "ping".
pub(crate) const OBSERVE_SECONDS: f32 = 0.6;
/// Length of the draw "click".
pub(crate) const DRAW_SECONDS: f32 = 0.08;

const ATTACK_SECONDS: f32 = 0.005;
const RELEASE_SECONDS: f32 = 0.01;

/// Pre-rendered mono cue waveforms for one output sample rate.
#[derive(Debug, Clone)]
pub(crate) struct CueBank {
    observe: Vec<f32>,
    draw: Vec<f32>,
}

impl CueBank {
    pub(crate) fn render(sample_rate: u32) -> Self {
        Self {
            observe: render_ping(sample_rate),
            draw: render_click(sample_rate),
        }
    }

    pub(crate) fn samples(&self, cue: Cue) -> &[f32] {
        match cue {
            Cue::Observe => &self.observe,
            Cue::Draw => &self.draw,
        }
    }
}

/// Two-partial bell tone with a slow decay.
fn render_ping(sample_rate: u32) -> Vec<f32> {
    synthesize(sample_rate, OBSERVE_SECONDS, |t| {
        let partials = (TAU * 880.0 * t).sin() + 0.5 * (TAU * 1320.0 * t).sin();
        partials / 1.5 * (-6.0 * t).exp()
    })
}

/// Short high burst that dies out almost immediately.
fn render_click(sample_rate: u32) -> Vec<f32> {
    synthesize(sample_rate, DRAW_SECONDS, |t| {
        (TAU * 1800.0 * t).sin() * (-60.0 * t).exp()
    })
}

fn synthesize(sample_rate: u32, seconds: f32, wave: impl Fn(f32) -> f32) -> Vec<f32> {
    let rate = sample_rate as f32;
    let len = (rate * seconds).round() as usize;

    (0..len)
        .map(|i| {
            let t = i as f32 / rate;
            let attack = (t / ATTACK_SECONDS).min(1.0);
            let release = ((seconds - t) / RELEASE_SECONDS).clamp(0.0, 1.0);
            (wave(t) * attack * release).clamp(-1.0, 1.0)
        })
        .collect()
}
