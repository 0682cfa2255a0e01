use crate::{ViewState, ui::Message};

use flash_sketch_core::Phase;

use iced::{
    Alignment, Background, Color, ContentFit, Element, Length, Theme,
    widget::{
        Space, button, column, container, image, image::Handle, mouse_area, row, stack, text,
    },
};
use tracing::warn;

const OBSERVE_COLOR: Color = Color::from_rgb(0.16, 0.45, 0.85);
const DRAW_COLOR: Color = Color::from_rgb(0.88, 0.45, 0.16);
const BLINDFOLD_COLOR: Color = Color::from_rgb(0.08, 0.08, 0.1);
const OVERLAY_COLOR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.7);

/// Running or paused session. Clicking anywhere toggles pause.
pub(crate) fn view<'a>(state: &'a ViewState, preview: Option<&'a Handle>) -> Element<'a, Message> {
    let session = &state.session;
    let counting = match (session.phase, session.previous_phase) {
        (Phase::Paused, Some(previous)) => previous,
        (Phase::Paused, None) => {
            warn!("Paused without a previous phase, showing observe status");
            Phase::Observing
        }
        (phase, _) => phase,
    };

    let (status, bar_color) = match counting {
        Phase::Drawing => ("Draw from memory", DRAW_COLOR),
        _ => ("Memorize the image", OBSERVE_COLOR),
    };

    let bar = row![
        text(status).size(20),
        Space::with_width(Length::Fill),
        text(session.time_left.to_string()).size(36),
        text("sec").size(14),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let bar = container(bar)
        .width(Length::Fill)
        .padding([10, 20])
        .style(move |_theme: &Theme| filled(bar_color));

    let stage: Element<'a, Message> = match preview {
        Some(handle) if state.shows_image() => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        _ => container(text("Image hidden").size(24))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(|_theme: &Theme| filled(BLINDFOLD_COLOR))
            .into(),
    };

    let body: Element<'a, Message> = column![bar, stage].into();

    let content: Element<'a, Message> = if session.phase == Phase::Paused {
        let overlay = container(
            column![
                text("PAUSED").size(48),
                text("Click or press Space to resume").size(16),
                button(text("Exit").size(18))
                    .on_press(Message::Exit)
                    .padding([10, 32])
                    .style(button::danger),
            ]
            .spacing(16)
            .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(|_theme: &Theme| filled(OVERLAY_COLOR));

        stack![body, overlay].into()
    } else {
        body
    };

    mouse_area(content).on_press(Message::TogglePause).into()
}

fn filled(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(Color::WHITE),
        ..container::Style::default()
    }
}
