use crate::components::{banner, Tone};
use crate::flows::dicom::{DicomFlow, DicomStudyView, LoadedStudy, SUCCESS_TITLE};
use crate::message::Message;
use crate::model::WindowParameters;
use crate::views::{file_picker, image_panel, metadata_panel, outcome_view};
use iced::widget::{column, container, row, slider, text};
use iced::{Alignment, Element, Length};

const CONTROL_LABEL_WIDTH: f32 = 140.0;

pub fn dicom_panel(flow: &DicomFlow) -> Element<'_, Message> {
    let picker = file_picker(
        "Choose DICOM File",
        Message::PickDicomFile,
        flow.selection.file_name(),
        "Process",
        Message::SubmitDicom,
    );

    let mut content = column![text("DICOM Image Processing").size(24), picker].spacing(16);

    if let Some(study) = flow.loaded() {
        content = content.push(window_controls(study));
    }

    let params = flow.loaded().map(|study| study.params);
    content
        .push(outcome_view(flow.panel(), move |view| study_view(view, params)))
        .into()
}

fn window_controls(study: &LoadedStudy) -> Element<'_, Message> {
    let center = row![
        text("Window Center").width(Length::Fixed(CONTROL_LABEL_WIDTH)),
        slider(
            study.bounds.center.clone(),
            study.params.center,
            Message::WindowCenterChanged
        )
        .step(1.0),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let width = row![
        text("Window Width").width(Length::Fixed(CONTROL_LABEL_WIDTH)),
        slider(
            study.bounds.width.clone(),
            study.params.width,
            Message::WindowWidthChanged
        )
        .step(1.0),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    column![center, width].spacing(8).into()
}

fn study_view(view: &DicomStudyView, params: Option<WindowParameters>) -> Element<'_, Message> {
    let info = column![
        banner(Tone::Success, SUCCESS_TITLE, None),
        metadata_panel(&view.metadata, params),
    ]
    .spacing(12);

    row![
        container(info).width(Length::FillPortion(2)),
        container(image_panel(Some(&view.image)))
            .width(Length::FillPortion(3))
            .height(Length::Fill),
    ]
    .spacing(16)
    .into()
}
