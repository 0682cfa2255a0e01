use crate::{
    Cue,
    audio::{CueBank, Voice},
};

fn drain(voice: &mut Voice, bank: &CueBank, count: usize) -> Vec<f32> {
    (0..count).map(|_| voice.next_sample(bank)).collect()
}

/// WHAT: An idle voice outputs silence
/// WHY: The stream runs continuously between cues
#[test]
fn given_idle_voice_when_pulling_samples_then_silence() {
    // Given: A voice that was never triggered
    let bank = CueBank::render(8_000);
    let mut voice = Voice::new(1.0);

    // When/Then: Every sample is zero
    assert!(drain(&mut voice, &bank, 64).iter().all(|s| *s == 0.0));
    assert!(!voice.is_playing());
}

/// WHAT: A cue plays once and then stops
/// WHY: Cues are one-shot, not looped
#[test]
fn given_triggered_voice_when_cue_ends_then_returns_to_silence() {
    // Given: A voice playing the draw cue at full volume
    let bank = CueBank::render(8_000);
    let len = bank.samples(Cue::Draw).len();
    let mut voice = Voice::new(1.0);
    voice.restart(Cue::Draw);

    // When: Pulling the whole cue plus a tail
    let played = drain(&mut voice, &bank, len);
    let tail = drain(&mut voice, &bank, 16);

    // Then: The cue came out unchanged, followed by silence
    assert_eq!(played.as_slice(), bank.samples(Cue::Draw));
    assert!(tail.iter().all(|s| *s == 0.0));
    assert!(!voice.is_playing());
}

/// WHAT: A trigger mid-cue restarts from the first sample
/// WHY: Overlapping triggers restart rather than queue
#[test]
fn given_playing_voice_when_retriggered_then_restarts_from_beginning() {
    // Given: The observe cue halfway through
    let bank = CueBank::render(8_000);
    let mut voice = Voice::new(1.0);
    voice.restart(Cue::Observe);
    let half = bank.samples(Cue::Observe).len() / 2;
    drain(&mut voice, &bank, half);

    // When: Triggering again
    voice.restart(Cue::Observe);
    let restarted = drain(&mut voice, &bank, 32);

    // Then: Output matches the start of the cue
    assert_eq!(restarted.as_slice(), &bank.samples(Cue::Observe)[..32]);
}

/// WHAT: Volume scales every sample and is clamped to [0, 1]
/// WHY: Config volume must not amplify past full scale
#[test]
fn given_volume_when_playing_then_samples_scaled() {
    // Given: Half volume and an out-of-range volume
    let bank = CueBank::render(8_000);
    let mut half = Voice::new(0.5);
    let mut loud = Voice::new(4.0);
    half.restart(Cue::Observe);
    loud.restart(Cue::Observe);

    // When: Pulling samples
    let halved = drain(&mut half, &bank, 200);
    let clamped = drain(&mut loud, &bank, 200);

    // Then: Half volume halves, excessive volume clamps to unity
    let source = &bank.samples(Cue::Observe)[..200];
    for ((h, c), s) in halved.iter().zip(&clamped).zip(source) {
        assert!((h - s * 0.5).abs() < f32::EPSILON);
        assert!((c - s).abs() < f32::EPSILON);
    }
}
