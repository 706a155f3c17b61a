use crate::components::{banner, Tone};
use crate::message::Message;
use crate::model::{FailureReport, OutcomePanel};
use crate::views::image_panel;
use iced::widget::{column, text, Column};
use iced::Element;

pub fn outcome_view<'a, T>(
    panel: &'a OutcomePanel<T>,
    render_success: impl FnOnce(&'a T) -> Element<'a, Message>,
) -> Element<'a, Message> {
    match panel {
        OutcomePanel::Hidden => Column::new().into(),
        OutcomePanel::Loading => text("⏳ Processing...").size(18).into(),
        OutcomePanel::Success(value) => render_success(value),
        OutcomePanel::Failure(report) => failure_view(report),
    }
}

fn failure_view(report: &FailureReport) -> Element<'_, Message> {
    let mut content =
        column![banner(Tone::Error, &report.title, Some(report.message.as_str()))].spacing(12);
    if let Some(image) = &report.image {
        content = content.push(image_panel(Some(image)));
    }
    content.into()
}
