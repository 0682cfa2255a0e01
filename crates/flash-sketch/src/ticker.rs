use crate::AppCommand;

use flash_sketch_core::{StretchId, TickSource};

use std::time::Duration;

use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{Instant, MissedTickBehavior},
};
use tracing::{debug, trace};

/// Interval between countdown ticks.
pub(crate) const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Tick source backed by a tokio interval task per counting stretch.
///
/// Each tick is delivered as [`AppCommand::Tick`] on the session loop's
/// command channel, so the controller only ever runs on that loop.
#[derive(Debug, Clone)]
pub struct TokioTicker {
    command_tx: mpsc::Sender<AppCommand>,
    period: Duration,
}

impl TokioTicker {
    /// Ticker emitting once per [`TICK_PERIOD`].
    pub fn new(command_tx: mpsc::Sender<AppCommand>) -> Self {
        Self::with_period(command_tx, TICK_PERIOD)
    }

    /// Ticker emitting once per `period`.
    pub fn with_period(command_tx: mpsc::Sender<AppCommand>, period: Duration) -> Self {
        Self { command_tx, period }
    }
}

/// Running tick task. Dropping it aborts the task.
#[derive(Debug)]
pub struct TickTask {
    stretch: StretchId,
    handle: JoinHandle<()>,
}

impl Drop for TickTask {
    fn drop(&mut self) {
        self.handle.abort();
        trace!(stretch = %self.stretch, "Tick task aborted");
    }
}

impl TickSource for TokioTicker {
    type Handle = TickTask;

    /// Must be called from within a tokio runtime.
    fn acquire(&mut self, stretch: StretchId) -> TickTask {
        let command_tx = self.command_tx.clone();
        let period = self.period;

        let handle = tokio::spawn(async move {
            // First tick one full period after the stretch begins.
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                if command_tx.send(AppCommand::Tick { stretch }).await.is_err() {
                    debug!(stretch = %stretch, "Command channel closed, tick task stopping");
                    break;
                }
            }
        });

        trace!(stretch = %stretch, "Tick task started");
        TickTask { stretch, handle }
    }
}
