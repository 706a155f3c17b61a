use crate::components::{banner, Tone};
use crate::flows::plate::{PlateDetection, PlateFlow, SUCCESS_TITLE};
use crate::message::Message;
use crate::views::{file_picker, image_panel, outcome_view};
use iced::widget::{column, container, row, text};
use iced::{Element, Length};

pub fn plate_panel(flow: &PlateFlow) -> Element<'_, Message> {
    let picker = file_picker(
        "Choose Image",
        Message::PickPlateImage,
        flow.selection.file_name(),
        "Detect Plate",
        Message::SubmitPlate,
    );

    column![
        text("License Plate Recognition").size(24),
        picker,
        outcome_view(flow.panel(), detection_view),
    ]
    .spacing(16)
    .into()
}

fn detection_view(detection: &PlateDetection) -> Element<'_, Message> {
    let info = column![
        banner(Tone::Success, SUCCESS_TITLE, None),
        text(format!("📋 Plate: {}", detection.plate_number)).size(22),
        text(format!("🎯 Confidence: {}", detection.confidence_label())),
        text(format!("🔧 Method: {}", detection.method)),
    ]
    .spacing(10);

    row![
        container(info).width(Length::FillPortion(2)),
        container(image_panel(detection.image.as_ref()))
            .width(Length::FillPortion(3))
            .height(Length::Fill),
    ]
    .spacing(16)
    .into()
}
