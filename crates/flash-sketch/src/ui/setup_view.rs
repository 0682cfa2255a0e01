use crate::{ViewState, ui::Message};

use iced::{
    Alignment, ContentFit, Element, Length,
    widget::{button, column, container, image, image::Handle, row, text, text_input},
};

const PREVIEW_HEIGHT: f32 = 240.0;

/// Idle screen: image picker, duration fields and the START button.
pub(crate) fn view<'a>(
    state: &'a ViewState,
    notice: Option<&'a str>,
    observe_input: &'a str,
    draw_input: &'a str,
    preview: Option<&'a Handle>,
) -> Element<'a, Message> {
    let selection = match &state.session.image {
        Some(image) => {
            let (width, height) = image.dimensions();
            format!("{} ({}x{})", image.file_name(), width, height)
        }
        None => "No image selected".to_string(),
    };

    let picker = row![
        button("Select image")
            .on_press(Message::PickImage)
            .padding(10),
        text(selection).size(14),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let durations = row![
        duration_field("Observe", observe_input, Message::ObserveInputChanged),
        duration_field("Draw", draw_input, Message::DrawInputChanged),
    ]
    .spacing(32);

    let mut content = column![
        text("Flash Sketch").size(48),
        text("Study the image, then draw it from memory.").size(16),
        picker,
        durations,
        button(text("START").size(20))
            .on_press(Message::Start)
            .padding([12, 48]),
    ]
    .spacing(20)
    .align_x(Alignment::Center);

    if let Some(notice) = notice {
        content = content.push(text(notice).size(14).style(text::danger));
    }

    if let Some(handle) = preview {
        content = content.push(
            image(handle.clone())
                .height(Length::Fixed(PREVIEW_HEIGHT))
                .content_fit(ContentFit::Contain),
        );
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(40)
        .into()
}

fn duration_field<'a>(
    label: &'a str,
    value: &'a str,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    column![
        text(label).size(14),
        row![
            text_input("seconds", value)
                .on_input(on_input)
                .width(Length::Fixed(90.0))
                .padding(8),
            text("sec").size(14),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    ]
    .spacing(6)
    .into()
}
