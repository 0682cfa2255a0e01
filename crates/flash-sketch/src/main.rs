//! Flash-Sketch: observe/draw memory training timer.

mod app;
mod app_command;
mod config;
mod error;
mod logging;
#[cfg(test)]
mod tests;
mod ticker;
mod ui;
mod view_state;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    error::{AppError, Result as AppResult},
    ticker::TokioTicker,
    view_state::ViewState,
};

use crate::{app::Media, config::Config};

use flash_sketch_core::{ChimePlayer, PhaseController, SilentTrigger};

use tokio::sync::{mpsc, watch};
use tracing::{error, info, warn};

const COMMAND_CHANNEL_CAPACITY: usize = 32;

/// Application entry point.
fn main() {
    let log_dir = Config::log_dir();
    let _log_guard = logging::init_logging(log_dir.as_deref().ok());
    if let Err(e) = &log_dir {
        warn!(error = ?e, "File logging disabled");
    }

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let durations = match config.timer.durations() {
        Ok(d) => d,
        Err(e) => {
            error!("Invalid timer config: {:?}", e);
            std::process::exit(1);
        }
    };

    let (command_tx, command_rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
    let (view_tx, view_rx) = watch::channel(ViewState::initial(durations));
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let ticker_tx = command_tx.clone();
    let sound = config.sound.clone();

    // Session loop runs on its own runtime thread; iced owns the main thread.
    let session_thread = std::thread::Builder::new()
        .name("flash-sketch-session".to_string())
        .spawn(move || {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    error!("Failed to create tokio runtime: {:?}", e);
                    std::process::exit(1);
                }
            };

            rt.block_on(async {
                let media: Media = if !sound.enabled {
                    info!("Cue sounds disabled by config");
                    Box::new(SilentTrigger)
                } else {
                    match ChimePlayer::new(sound.volume) {
                        Ok(player) => Box::new(player),
                        Err(e) => {
                            warn!(error = %e, "Sound unavailable, continuing without cues");
                            Box::new(SilentTrigger)
                        }
                    }
                };

                let app = App {
                    controller: PhaseController::new(durations, TokioTicker::new(ticker_tx), media),
                    command_rx,
                    view_tx,
                    shutdown_rx,
                };

                if let Err(e) = app.run().await {
                    error!(error = ?e, "Session loop error");
                }
            });
        });

    let session_thread = match session_thread {
        Ok(handle) => handle,
        Err(e) => {
            error!("Failed to spawn session thread: {:?}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = ui::run(&config, command_tx, view_rx) {
        error!(error = ?e, "Window error");
    }

    let _ = shutdown_tx.send(true);
    if session_thread.join().is_err() {
        error!("Session thread panicked");
    }

    info!("Flash-Sketch shut down");
}
