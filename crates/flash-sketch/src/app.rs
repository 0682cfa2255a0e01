use crate::{AppCommand, AppResult, TokioTicker, ViewState, view_state::notice_for};

use flash_sketch_core::{CoreResult, MediaTrigger, PhaseController, PhaseSeconds, TickOutcome};

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn};

/// Cue output used by the session loop: the speaker or the silent fallback.
pub(crate) type Media = Box<dyn MediaTrigger + Send>;

/// Session loop state.
///
/// Runs on the async runtime thread and is the only owner of the phase
/// controller. The window talks to it through `command_rx` and reads the
/// result from `view_tx`.
pub struct App {
    pub(crate) controller: PhaseController<TokioTicker, Media>,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) view_tx: watch::Sender<ViewState>,
    pub(crate) shutdown_rx: watch::Receiver<bool>,
}

impl App {
    /// Run the session loop until shutdown.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("Flash-Sketch session loop starting");

        self.publish(None);

        loop {
            tokio::select! {
                changed = self.shutdown_rx.changed() => {
                    if changed.is_err() || *self.shutdown_rx.borrow() {
                        info!("Shutdown signalled");
                        break;
                    }
                }

                Some(cmd) = self.command_rx.recv() => {
                    self.handle_command(cmd);
                }

                else => {
                    info!("All channels closed, shutting down");
                    break;
                }
            }
        }

        // Releases any running tick task before the runtime goes away.
        drop(self.controller);
        info!("Flash-Sketch session loop stopped");

        Ok(())
    }

    /// Apply one command to the controller and publish the new view.
    pub(crate) fn handle_command(&mut self, cmd: AppCommand) {
        let result: CoreResult<()> = match cmd {
            AppCommand::SelectImage { path } => self.controller.select_image(&path).map(|image| {
                info!(file_name = %image.file_name(), "Reference image selected");
            }),
            AppCommand::SetObserveDuration { seconds } => PhaseSeconds::new(seconds)
                .and_then(|seconds| self.controller.set_observe_duration(seconds)),
            AppCommand::SetDrawDuration { seconds } => PhaseSeconds::new(seconds)
                .and_then(|seconds| self.controller.set_draw_duration(seconds)),
            AppCommand::Start => self.controller.start(),
            AppCommand::TogglePause => self.controller.toggle_pause(),
            AppCommand::Exit => self.controller.exit(),
            AppCommand::Tick { stretch } => match self.controller.tick(stretch) {
                TickOutcome::Ignored => {
                    debug!(stretch = %stretch, "Stale tick dropped");
                    return;
                }
                TickOutcome::Counted | TickOutcome::Switched(_) => Ok(()),
            },
        };

        let notice = match result {
            Ok(()) => None,
            Err(e) => {
                warn!(error = %e, "Command rejected");
                Some(notice_for(&e))
            }
        };

        self.publish(notice);
    }

    fn publish(&self, notice: Option<String>) {
        self.view_tx.send_replace(ViewState {
            session: self.controller.view(),
            notice,
        });
    }
}
