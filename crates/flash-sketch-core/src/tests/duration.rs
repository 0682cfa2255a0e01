use crate::{CoreError, Phase, PhaseDurations, PhaseSeconds};

/// WHAT: Zero seconds is rejected
/// WHY: A zero-length phase would switch on every tick
#[test]
fn given_zero_seconds_when_creating_duration_then_invalid_duration() {
    // Given/When: Zero seconds
    let result = PhaseSeconds::new(0);

    // Then: InvalidDuration carrying the value
    assert!(matches!(
        result,
        Err(CoreError::InvalidDuration { seconds: 0, .. })
    ));
}

/// WHAT: Either side of the pair being zero fails construction
/// WHY: Both phases need a positive length
#[test]
fn given_zero_draw_when_building_durations_then_rejected() {
    assert!(PhaseDurations::from_secs(30, 0).is_err());
    assert!(PhaseDurations::from_secs(0, 60).is_err());
}

/// WHAT: Only counting phases have a countdown length
/// WHY: Idle and paused never load a duration
#[test]
#[allow(clippy::unwrap_used)]
fn given_durations_when_looking_up_by_phase_then_counting_phases_only() {
    // Given: 30/60 durations
    let durations = PhaseDurations::from_secs(30, 60).unwrap();

    // When/Then: Lookup per phase
    assert_eq!(durations.for_phase(Phase::Observing), Some(30));
    assert_eq!(durations.for_phase(Phase::Drawing), Some(60));
    assert_eq!(durations.for_phase(Phase::Idle), None);
    assert_eq!(durations.for_phase(Phase::Paused), None);
}
