//! Observe/draw phase state machine.
//!
//! The controller owns its tick handle. Every exit from a counting phase drops
//! the handle before anything else happens, and every entry acquires a fresh
//! one under a new [`StretchId`].

use crate::{
    CoreError, CoreResult, Cue, ImageReference, ImageSource, MediaTrigger, Phase, PhaseDurations,
    PhaseSeconds, StretchId, TickSource,
};

use std::{panic::Location, path::Path};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, trace, warn};

/// What a single tick did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown went down by one second.
    Counted,
    /// The countdown ran out and the session moved to the given phase.
    Switched(Phase),
    /// The tick belonged to a released stretch, or nothing is counting.
    Ignored,
}

/// Immutable snapshot of the controller for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    /// Current phase.
    pub phase: Phase,
    /// Phase to return to on resume; only set while paused.
    pub previous_phase: Option<Phase>,
    /// Seconds remaining in the current or frozen countdown.
    pub time_left: u32,
    /// Durations used for the next phase entries.
    pub durations: PhaseDurations,
    /// Selected image, if any.
    pub image: Option<ImageReference>,
    /// Stretch currently counting, if any.
    pub active_stretch: Option<StretchId>,
}

/// Owns the current phase, the countdown and the transition rules.
pub struct PhaseController<T: TickSource, M: MediaTrigger> {
    phase: Phase,
    previous_phase: Option<Phase>,
    durations: PhaseDurations,
    time_left: u32,
    image: ImageSource,
    ticker: T,
    tick: Option<(StretchId, T::Handle)>,
    last_stretch: StretchId,
    media: M,
}

impl<T: TickSource, M: MediaTrigger> PhaseController<T, M> {
    /// Create an idle controller.
    pub fn new(durations: PhaseDurations, ticker: T, media: M) -> Self {
        info!(
            observe_secs = durations.observe.get(),
            draw_secs = durations.draw.get(),
            "PhaseController initialized"
        );

        Self {
            phase: Phase::Idle,
            previous_phase: None,
            durations,
            time_left: 0,
            image: ImageSource::new(),
            ticker,
            tick: None,
            last_stretch: StretchId::new(0),
            media,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Phase that resume will restore.
    pub fn previous_phase(&self) -> Option<Phase> {
        self.previous_phase
    }

    /// Seconds left in the running or frozen countdown.
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Durations for the next phase entries.
    pub fn durations(&self) -> PhaseDurations {
        self.durations
    }

    /// Currently selected image.
    pub fn image(&self) -> Option<&ImageReference> {
        self.image.current()
    }

    /// Stretch whose ticks are currently accepted.
    pub fn active_stretch(&self) -> Option<StretchId> {
        self.tick.as_ref().map(|(stretch, _)| *stretch)
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> SessionView {
        SessionView {
            phase: self.phase,
            previous_phase: self.previous_phase,
            time_left: self.time_left,
            durations: self.durations,
            image: self.image.current().cloned(),
            active_stretch: self.active_stretch(),
        }
    }

    /// Select the reference image. Only allowed while idle.
    #[track_caller]
    #[instrument(skip(self, path))]
    pub fn select_image<P: AsRef<Path>>(&mut self, path: P) -> CoreResult<&ImageReference> {
        self.require(Phase::Idle, "select an image")?;
        self.image.select(path)
    }

    /// Set the observe length for future entries. Only allowed while idle.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn set_observe_duration(&mut self, seconds: PhaseSeconds) -> CoreResult<()> {
        self.unlock_durations()?;
        self.durations.observe = seconds;
        debug!(observe_secs = seconds.get(), "Observe duration updated");
        Ok(())
    }

    /// Set the draw length for future entries. Only allowed while idle.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn set_draw_duration(&mut self, seconds: PhaseSeconds) -> CoreResult<()> {
        self.unlock_durations()?;
        self.durations.draw = seconds;
        debug!(draw_secs = seconds.get(), "Draw duration updated");
        Ok(())
    }

    /// Begin a session: idle → observing.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn start(&mut self) -> CoreResult<()> {
        self.require(Phase::Idle, "start")?;

        if !self.image.is_selected() {
            warn!("Start rejected, no image selected");
            return Err(CoreError::NoImageSelected {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.enter(Phase::Observing);
        info!(time_left = self.time_left, "Session started");
        Ok(())
    }

    /// Advance the countdown by one second.
    ///
    /// The tick that would reach zero switches phase instead, so a zero is
    /// never observable.
    #[instrument(level = "trace", skip(self))]
    pub fn tick(&mut self, stretch: StretchId) -> TickOutcome {
        if self.active_stretch() != Some(stretch) {
            trace!(phase = %self.phase, "Stale tick ignored");
            return TickOutcome::Ignored;
        }

        let Some(next) = self.phase.successor() else {
            return TickOutcome::Ignored;
        };

        if self.time_left <= 1 {
            self.enter(next);
            info!(phase = %next, time_left = self.time_left, "Phase switched");
            TickOutcome::Switched(next)
        } else {
            self.time_left -= 1;
            TickOutcome::Counted
        }
    }

    /// Suspend the countdown: observing/drawing → paused.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn pause(&mut self) -> CoreResult<()> {
        if !self.phase.is_counting() {
            return Err(self.rejected("pause"));
        }

        self.release_tick();
        self.previous_phase = Some(self.phase);
        self.phase = Phase::Paused;
        info!(time_left = self.time_left, "Session paused");
        Ok(())
    }

    /// Continue the frozen countdown: paused → previous phase.
    ///
    /// This is not a fresh entry, so no cue is played.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn resume(&mut self) -> CoreResult<()> {
        let resumed = match (self.phase, self.previous_phase) {
            (Phase::Paused, Some(previous)) => previous,
            _ => return Err(self.rejected("resume")),
        };

        self.previous_phase = None;
        self.phase = resumed;
        self.acquire_tick();
        info!(phase = %resumed, time_left = self.time_left, "Session resumed");
        Ok(())
    }

    /// Pause when counting, resume when paused.
    #[track_caller]
    pub fn toggle_pause(&mut self) -> CoreResult<()> {
        if self.phase == Phase::Paused {
            self.resume()
        } else {
            self.pause()
        }
    }

    /// Abandon the session: paused → idle.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn exit(&mut self) -> CoreResult<()> {
        self.require(Phase::Paused, "exit")?;

        self.release_tick();
        self.previous_phase = None;
        self.phase = Phase::Idle;
        self.time_left = 0;
        info!("Session exited");
        Ok(())
    }

    fn enter(&mut self, phase: Phase) {
        let Some(seconds) = self.durations.for_phase(phase) else {
            return;
        };

        self.release_tick();
        self.phase = phase;
        self.time_left = seconds;
        self.acquire_tick();

        let cue = match phase {
            Phase::Drawing => Cue::Draw,
            _ => Cue::Observe,
        };
        self.media.trigger(cue);
    }

    fn acquire_tick(&mut self) {
        let stretch = self.last_stretch.next();
        self.last_stretch = stretch;
        let handle = self.ticker.acquire(stretch);
        self.tick = Some((stretch, handle));
        debug!(stretch = %stretch, "Tick source acquired");
    }

    fn release_tick(&mut self) {
        if let Some((stretch, handle)) = self.tick.take() {
            drop(handle);
            debug!(stretch = %stretch, "Tick source released");
        }
    }

    #[track_caller]
    fn require(&self, phase: Phase, event: &'static str) -> CoreResult<()> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(self.rejected(event))
        }
    }

    #[track_caller]
    fn unlock_durations(&self) -> CoreResult<()> {
        if self.phase == Phase::Idle {
            return Ok(());
        }
        Err(CoreError::DurationLocked {
            phase: self.phase,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn rejected(&self, event: &'static str) -> CoreError {
        warn!(phase = %self.phase, event, "Event rejected");
        CoreError::InvalidTransition {
            from: self.phase,
            event,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl<T: TickSource, M: MediaTrigger> Drop for PhaseController<T, M> {
    fn drop(&mut self) {
        self.release_tick();
    }
}
