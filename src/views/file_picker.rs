use crate::message::Message;
use iced::widget::{button, row, text};
use iced::{Alignment, Element, Length};

pub fn file_picker(
    pick_label: &'static str,
    on_pick: Message,
    selected: Option<String>,
    submit_label: &'static str,
    on_submit: Message,
) -> Element<'static, Message> {
    let selected = selected.unwrap_or_else(|| "No file chosen".to_string());

    row![
        button(pick_label).on_press(on_pick),
        text(selected).width(Length::Fill),
        button(submit_label).on_press(on_submit),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}
