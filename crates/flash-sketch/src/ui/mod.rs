//! The single window: setup screen while idle, training screen otherwise.

mod setup_view;
mod training_view;

use crate::{AppCommand, AppError, AppResult, ViewState, config::Config, view_state::notice_for};

use flash_sketch_core::{Phase, PhaseDurations};

use std::panic::Location;

use error_location::ErrorLocation;
use iced::{
    Element, Size, Subscription, Task, Theme,
    keyboard::{self, Key, key::Named},
    widget::image::Handle,
};
use rfd::FileDialog;
use tokio::sync::{mpsc, watch};
use tokio_stream::{StreamExt, wrappers::WatchStream};
use tracing::{debug, error, info};
use uuid::Uuid;

const WINDOW_TITLE: &str = "Flash Sketch";
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];
const MAX_SECONDS_DIGITS: usize = 6;

/// Window events.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    /// The session loop published a new view.
    ViewChanged(ViewState),
    /// User clicked "Select image".
    PickImage,
    /// Observe seconds field edited.
    ObserveInputChanged(String),
    /// Draw seconds field edited.
    DrawInputChanged(String),
    /// User clicked START.
    Start,
    /// User clicked the training screen.
    TogglePause,
    /// User clicked Exit on the paused overlay.
    Exit,
    /// A keyboard shortcut was pressed outside any text field.
    Shortcut(Shortcut),
}

/// Keyboard shortcuts, resolved against the current phase in `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shortcut {
    /// Enter.
    Start,
    /// Space.
    TogglePause,
    /// Escape.
    Exit,
}

pub(crate) struct Ui {
    command_tx: mpsc::Sender<AppCommand>,
    view_rx: watch::Receiver<ViewState>,
    state: ViewState,
    /// Observe field text. Only sent to the session loop on START.
    pub(crate) observe_input: String,
    /// Draw field text. Only sent to the session loop on START.
    pub(crate) draw_input: String,
    /// Why the last START was refused before reaching the session loop.
    pub(crate) input_notice: Option<String>,
    preview: Option<(Uuid, Handle)>,
}

impl Ui {
    pub(crate) fn new(command_tx: mpsc::Sender<AppCommand>, view_rx: watch::Receiver<ViewState>) -> Self {
        let state = view_rx.borrow().clone();
        let durations = state.session.durations;

        Self {
            command_tx,
            view_rx,
            observe_input: durations.observe.get().to_string(),
            draw_input: durations.draw.get().to_string(),
            state,
            input_notice: None,
            preview: None,
        }
    }

    pub(crate) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ViewChanged(state) => {
                self.refresh_preview(&state);
                self.state = state;
            }
            Message::PickImage => {
                let picked = FileDialog::new()
                    .set_title("Select a reference image")
                    .add_filter("Images", IMAGE_EXTENSIONS)
                    .pick_file();

                match picked {
                    Some(path) => self.send(AppCommand::SelectImage { path }),
                    None => debug!("Image picker cancelled"),
                }
            }
            Message::ObserveInputChanged(raw) => {
                if is_seconds_input(&raw) {
                    self.observe_input = raw;
                    self.input_notice = None;
                }
            }
            Message::DrawInputChanged(raw) => {
                if is_seconds_input(&raw) {
                    self.draw_input = raw;
                    self.input_notice = None;
                }
            }
            Message::Start => self.start_session(),
            Message::TogglePause => self.send(AppCommand::TogglePause),
            Message::Exit => self.send(AppCommand::Exit),
            Message::Shortcut(shortcut) => {
                match shortcut_command(shortcut, self.state.session.phase) {
                    Some(AppCommand::Start) => self.start_session(),
                    Some(cmd) => self.send(cmd),
                    None => {}
                }
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let preview = self.preview.as_ref().map(|(_, handle)| handle);

        match self.state.session.phase {
            Phase::Idle => {
                let notice = self.input_notice.as_deref().or(self.state.notice.as_deref());
                setup_view::view(
                    &self.state,
                    notice,
                    &self.observe_input,
                    &self.draw_input,
                    preview,
                )
            }
            Phase::Observing | Phase::Drawing | Phase::Paused => {
                training_view::view(&self.state, preview)
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let view_updates = Subscription::run_with_id(
            "session-view",
            WatchStream::new(self.view_rx.clone()).map(Message::ViewChanged),
        );

        Subscription::batch([view_updates, keyboard::on_key_press(shortcut_for_key)])
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Durations as typed in the two fields.
    pub(crate) fn requested_durations(&self) -> Result<PhaseDurations, String> {
        let observe = parse_field("observe", &self.observe_input)?;
        let draw = parse_field("draw", &self.draw_input)?;
        PhaseDurations::from_secs(observe, draw).map_err(|e| notice_for(&e))
    }

    /// Apply both fields, then start, so the session always runs with the
    /// durations on screen.
    fn start_session(&mut self) {
        match self.requested_durations() {
            Ok(durations) => {
                self.input_notice = None;
                self.send(AppCommand::SetObserveDuration {
                    seconds: durations.observe.get(),
                });
                self.send(AppCommand::SetDrawDuration {
                    seconds: durations.draw.get(),
                });
                self.send(AppCommand::Start);
            }
            Err(notice) => {
                debug!(notice = %notice, "Start refused by duration fields");
                self.input_notice = Some(notice);
            }
        }
    }

    fn refresh_preview(&mut self, state: &ViewState) {
        match &state.session.image {
            Some(image) => {
                let current = self.preview.as_ref().map(|(id, _)| *id);
                if current != Some(image.id()) {
                    self.preview = Some((image.id(), Handle::from_path(image.path())));
                }
            }
            None => self.preview = None,
        }
    }

    #[track_caller]
    fn send(&self, cmd: AppCommand) {
        if let Err(e) = self.command_tx.try_send(cmd) {
            let err = AppError::ChannelSendFailed {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            };
            error!(error = ?err, "Failed to reach session loop");
        }
    }
}

/// Open the window and block until it closes.
pub(crate) fn run(
    config: &Config,
    command_tx: mpsc::Sender<AppCommand>,
    view_rx: watch::Receiver<ViewState>,
) -> AppResult<()> {
    info!(
        width = config.window.width,
        height = config.window.height,
        "Opening window"
    );

    iced::application(WINDOW_TITLE, Ui::update, Ui::view)
        .subscription(Ui::subscription)
        .theme(Ui::theme)
        .window_size(Size::new(config.window.width, config.window.height))
        .centered()
        .run_with(move || (Ui::new(command_tx, view_rx), Task::none()))
        .map_err(|e| AppError::Ui {
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Digits-only filter for the duration fields. Empty is allowed while editing.
pub(crate) fn is_seconds_input(raw: &str) -> bool {
    raw.len() <= MAX_SECONDS_DIGITS && raw.chars().all(|c| c.is_ascii_digit())
}

fn parse_field(label: &str, raw: &str) -> Result<u32, String> {
    raw.parse()
        .map_err(|_| format!("Enter the {} length in seconds.", label))
}

pub(crate) fn shortcut_command(shortcut: Shortcut, phase: Phase) -> Option<AppCommand> {
    match (shortcut, phase) {
        (Shortcut::Start, Phase::Idle) => Some(AppCommand::Start),
        (Shortcut::TogglePause, Phase::Observing | Phase::Drawing | Phase::Paused) => {
            Some(AppCommand::TogglePause)
        }
        (Shortcut::Exit, Phase::Paused) => Some(AppCommand::Exit),
        _ => None,
    }
}

fn shortcut_for_key(key: Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    let shortcut = match key {
        Key::Named(Named::Enter) => Shortcut::Start,
        Key::Named(Named::Space) => Shortcut::TogglePause,
        Key::Named(Named::Escape) => Shortcut::Exit,
        _ => return None,
    };
    Some(Message::Shortcut(shortcut))
}
