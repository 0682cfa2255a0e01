use crate::{
    AppCommand, ViewState,
    ui::{Message, Shortcut, Ui, is_seconds_input, shortcut_command},
};

use flash_sketch_core::{Phase, PhaseDurations};

use tokio::sync::{mpsc, watch};

struct SetupScreen {
    ui: Ui,
    command_rx: mpsc::Receiver<AppCommand>,
    _view_tx: watch::Sender<ViewState>,
}

#[allow(clippy::unwrap_used)]
fn setup_screen(observe: u32, draw: u32) -> SetupScreen {
    let durations = PhaseDurations::from_secs(observe, draw).unwrap();
    let (command_tx, command_rx) = mpsc::channel(8);
    let (view_tx, view_rx) = watch::channel(ViewState::initial(durations));

    SetupScreen {
        ui: Ui::new(command_tx, view_rx),
        command_rx,
        _view_tx: view_tx,
    }
}

impl SetupScreen {
    fn press(&mut self, message: Message) {
        let _ = self.ui.update(message);
    }

    fn sent(&mut self) -> Vec<AppCommand> {
        let mut sent = Vec::new();
        while let Ok(cmd) = self.command_rx.try_recv() {
            sent.push(cmd);
        }
        sent
    }
}

/// WHAT: Duration fields accept up to six digits and nothing else
/// WHY: Letters and signs would otherwise reach the duration parser
#[test]
fn given_field_edits_when_filtering_then_only_digits_kept() {
    assert!(is_seconds_input("45"));
    assert!(is_seconds_input("0"));
    assert!(is_seconds_input(""));
    assert!(is_seconds_input("999999"));
    assert!(!is_seconds_input("4a"));
    assert!(!is_seconds_input("-3"));
    assert!(!is_seconds_input("9999999"));
}

/// WHAT: Typing in a field sends nothing to the session loop
/// WHY: Half-typed values must never become the running duration
#[test]
fn given_setup_screen_when_editing_fields_then_no_commands_sent() {
    // Given: The default setup screen
    let mut screen = setup_screen(30, 60);

    // When: Deleting the observe field one character at a time
    screen.press(Message::ObserveInputChanged("3".to_string()));
    screen.press(Message::ObserveInputChanged(String::new()));

    // Then: The field shows the edit and nothing was sent
    assert_eq!(screen.ui.observe_input, "");
    assert!(screen.sent().is_empty());
}

/// WHAT: START with an emptied field is refused before reaching the session loop
/// WHY: The session must not run with a value the field no longer shows
#[test]
fn given_emptied_observe_field_when_start_pressed_then_nothing_sent_and_notice_shown() {
    // Given: "30" deleted down to an empty field
    let mut screen = setup_screen(30, 60);
    screen.press(Message::ObserveInputChanged("3".to_string()));
    screen.press(Message::ObserveInputChanged(String::new()));

    // When: Pressing START
    screen.press(Message::Start);

    // Then: Nothing is sent and the user is told why
    assert!(screen.sent().is_empty());
    assert_eq!(
        screen.ui.input_notice.as_deref(),
        Some("Enter the observe length in seconds.")
    );
}

/// WHAT: START with a zero field is refused and the old length is not used
/// WHY: A rejected value must not silently fall back to the previous one
#[test]
fn given_zero_draw_field_when_start_pressed_then_nothing_sent_and_notice_shown() {
    // Given: The draw field set to "0"
    let mut screen = setup_screen(30, 60);
    screen.press(Message::DrawInputChanged("0".to_string()));

    // When: Pressing START
    screen.press(Message::Start);

    // Then: Nothing is sent and the field still shows what was typed
    assert!(screen.sent().is_empty());
    assert_eq!(screen.ui.draw_input, "0");
    assert_eq!(
        screen.ui.input_notice.as_deref(),
        Some("Durations must be at least 1 second.")
    );

    // And: Editing the field clears the notice
    screen.press(Message::DrawInputChanged("5".to_string()));
    assert!(screen.ui.input_notice.is_none());
}

/// WHAT: START applies both field values before starting
/// WHY: The controller must count down exactly what the fields show
#[test]
fn given_edited_fields_when_start_pressed_then_durations_sent_before_start() {
    // Given: Observe edited to 12, draw left at 60
    let mut screen = setup_screen(30, 60);
    screen.press(Message::ObserveInputChanged("1".to_string()));
    screen.press(Message::ObserveInputChanged("12".to_string()));

    // When: Pressing START
    screen.press(Message::Start);

    // Then: Both durations go out first, then Start
    let sent = screen.sent();
    assert_eq!(sent.len(), 3);
    assert!(matches!(sent[0], AppCommand::SetObserveDuration { seconds: 12 }));
    assert!(matches!(sent[1], AppCommand::SetDrawDuration { seconds: 60 }));
    assert!(matches!(sent[2], AppCommand::Start));
    assert!(screen.ui.input_notice.is_none());
}

/// WHAT: Enter goes through the same field check as the START button
/// WHY: The shortcut must not bypass the duration fields
#[test]
fn given_empty_field_when_enter_pressed_then_start_refused() {
    // Given: An emptied draw field
    let mut screen = setup_screen(30, 60);
    screen.press(Message::DrawInputChanged(String::new()));

    // When: Pressing Enter
    screen.press(Message::Shortcut(Shortcut::Start));

    // Then: Nothing is sent
    assert!(screen.sent().is_empty());
    assert!(screen.ui.input_notice.is_some());

    // When: Fixing the field and pressing Enter again
    screen.press(Message::DrawInputChanged("45".to_string()));
    screen.press(Message::Shortcut(Shortcut::Start));

    // Then: The typed values are applied before Start
    let sent = screen.sent();
    assert!(matches!(sent[0], AppCommand::SetObserveDuration { seconds: 30 }));
    assert!(matches!(sent[1], AppCommand::SetDrawDuration { seconds: 45 }));
    assert!(matches!(sent[2], AppCommand::Start));
}

/// WHAT: Enter only starts from idle
/// WHY: Enter during training must not produce a rejected command
#[test]
fn given_enter_when_resolving_then_start_only_while_idle() {
    assert!(matches!(
        shortcut_command(Shortcut::Start, Phase::Idle),
        Some(AppCommand::Start)
    ));
    assert!(shortcut_command(Shortcut::Start, Phase::Observing).is_none());
    assert!(shortcut_command(Shortcut::Start, Phase::Paused).is_none());
}

/// WHAT: Space toggles pause in every training phase
/// WHY: It mirrors clicking the training screen
#[test]
fn given_space_when_resolving_then_toggle_outside_idle() {
    for phase in [Phase::Observing, Phase::Drawing, Phase::Paused] {
        assert!(matches!(
            shortcut_command(Shortcut::TogglePause, phase),
            Some(AppCommand::TogglePause)
        ));
    }
    assert!(shortcut_command(Shortcut::TogglePause, Phase::Idle).is_none());
}

/// WHAT: Escape exits only while paused
/// WHY: Exit is only offered on the paused overlay
#[test]
fn given_escape_when_resolving_then_exit_only_while_paused() {
    assert!(matches!(
        shortcut_command(Shortcut::Exit, Phase::Paused),
        Some(AppCommand::Exit)
    ));
    assert!(shortcut_command(Shortcut::Exit, Phase::Drawing).is_none());
    assert!(shortcut_command(Shortcut::Exit, Phase::Idle).is_none());
}
