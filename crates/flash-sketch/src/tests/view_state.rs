use crate::{ViewState, view_state::notice_for};

use flash_sketch_core::{CoreError, Phase, PhaseDurations};

use error_location::ErrorLocation;

#[allow(clippy::unwrap_used)]
fn view_in(phase: Phase, previous_phase: Option<Phase>) -> ViewState {
    let mut view = ViewState::initial(PhaseDurations::from_secs(30, 60).unwrap());
    view.session.phase = phase;
    view.session.previous_phase = previous_phase;
    view
}

/// WHAT: The image is visible only while observing or paused out of observing
/// WHY: Drawing must be done from memory
#[test]
fn given_each_phase_when_checking_visibility_then_only_observing_shows_image() {
    assert!(view_in(Phase::Observing, None).shows_image());
    assert!(view_in(Phase::Paused, Some(Phase::Observing)).shows_image());

    assert!(!view_in(Phase::Drawing, None).shows_image());
    assert!(!view_in(Phase::Paused, Some(Phase::Drawing)).shows_image());
    assert!(!view_in(Phase::Idle, None).shows_image());
}

/// WHAT: The initial view is idle with configured durations
/// WHY: The window renders before the session loop publishes
#[test]
#[allow(clippy::unwrap_used)]
fn given_durations_when_building_initial_view_then_idle_without_notice() {
    let view = ViewState::initial(PhaseDurations::from_secs(7, 9).unwrap());

    assert_eq!(view.session.phase, Phase::Idle);
    assert_eq!(view.session.time_left, 0);
    assert_eq!(view.session.durations.observe.get(), 7);
    assert_eq!(view.session.durations.draw.get(), 9);
    assert!(view.notice.is_none());
}

/// WHAT: Notices omit the error location
/// WHY: Source locations are for logs, not for the user
#[test]
fn given_missing_image_error_when_rendering_notice_then_plain_sentence() {
    let error = CoreError::NoImageSelected {
        location: ErrorLocation::from(std::panic::Location::caller()),
    };

    let notice = notice_for(&error);

    assert_eq!(notice, "Select an image before starting.");
    assert!(!notice.contains(".rs"));
}
