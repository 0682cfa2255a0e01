use flash_sketch_core::{CoreError, Phase, PhaseDurations, SessionView};

/// Everything the window renders, published by the session loop.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Snapshot of the phase controller.
    pub session: SessionView,
    /// Message for the last rejected command, cleared by the next accepted one.
    pub notice: Option<String>,
}

impl ViewState {
    /// The idle screen before the session loop has published anything.
    pub fn initial(durations: PhaseDurations) -> Self {
        Self {
            session: SessionView {
                phase: Phase::Idle,
                previous_phase: None,
                time_left: 0,
                durations,
                image: None,
                active_stretch: None,
            },
            notice: None,
        }
    }

    /// Whether the reference image is visible right now.
    ///
    /// Hidden while drawing, and while paused out of drawing.
    pub fn shows_image(&self) -> bool {
        match self.session.phase {
            Phase::Observing => true,
            Phase::Paused => self.session.previous_phase == Some(Phase::Observing),
            Phase::Idle | Phase::Drawing => false,
        }
    }
}

/// User-facing text for a rejected command.
pub(crate) fn notice_for(error: &CoreError) -> String {
    match error {
        CoreError::NoImageSelected { .. } => "Select an image before starting.".to_string(),
        CoreError::InvalidDuration { .. } => "Durations must be at least 1 second.".to_string(),
        CoreError::DurationLocked { .. } => {
            "Durations can only be changed before starting.".to_string()
        }
        CoreError::InvalidTransition { from, event, .. } => {
            format!("Cannot {} while {}.", event, from)
        }
        CoreError::ImageNotFound { path, .. } => {
            format!("Could not find {}.", path.display())
        }
        CoreError::ImageUnreadable { path, .. } => {
            format!("{} is not a readable image.", path.display())
        }
        CoreError::Playback { .. } => "Sound playback is unavailable.".to_string(),
    }
}
