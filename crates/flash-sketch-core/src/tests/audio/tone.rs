use crate::{
    Cue,
    audio::{
        CueBank,
        tone::{DRAW_SECONDS, OBSERVE_SECONDS},
    },
};

/// WHAT: Cue buffers have the expected length for the sample rate
/// WHY: Playback length must not depend on the device rate
#[test]
fn given_sample_rate_when_rendering_then_lengths_match_durations() {
    // Given/When: Rendering at 48kHz
    let bank = CueBank::render(48_000);

    // Then: Lengths follow the cue durations
    let observe_len = (48_000.0 * OBSERVE_SECONDS).round() as usize;
    let draw_len = (48_000.0 * DRAW_SECONDS).round() as usize;
    assert_eq!(bank.samples(Cue::Observe).len(), observe_len);
    assert_eq!(bank.samples(Cue::Draw).len(), draw_len);
}

/// WHAT: Samples stay in [-1, 1] and fade in and out
/// WHY: Clipping or hard edges are audible as clicks
#[test]
fn given_rendered_cues_then_bounded_and_faded_at_edges() {
    // Given: Cues at 44.1kHz
    let bank = CueBank::render(44_100);

    for cue in [Cue::Observe, Cue::Draw] {
        let samples = bank.samples(cue);

        // Then: Bounded, audible and silent at both ends
        assert!(samples.iter().all(|s| s.is_finite() && s.abs() <= 1.0));
        assert!(samples.iter().any(|s| s.abs() > 0.1));
        assert!(samples.first().is_some_and(|s| s.abs() < 1e-3));
        assert!(samples.last().is_some_and(|s| s.abs() < 1e-2));
    }
}
