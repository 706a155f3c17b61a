use crate::api::StudyMetadata;
use crate::message::Message;
use crate::model::WindowParameters;
use crate::utils::format_dimensions;
use iced::widget::text::Wrapping;
use iced::widget::{column, row, text};
use iced::{Element, Length};

pub fn metadata_panel<'a>(
    metadata: &'a StudyMetadata,
    params: Option<WindowParameters>,
) -> Element<'a, Message> {
    let table = metadata_rows(metadata, params)
        .into_iter()
        .fold(column![text("📊 DICOM Information").size(18)], |table, (label, value)| {
            table.push(
                row![
                    text(label).width(Length::FillPortion(1)),
                    text(value)
                        .width(Length::FillPortion(2))
                        .wrapping(Wrapping::Word),
                ]
                .spacing(12),
            )
        });

    table.spacing(8).into()
}

fn metadata_rows(
    metadata: &StudyMetadata,
    params: Option<WindowParameters>,
) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Patient", metadata.patient_name.clone()),
        ("ID", metadata.patient_id.clone()),
        ("Date", metadata.study_date.clone()),
        ("Modality", metadata.modality.clone()),
        ("Size", format_dimensions(metadata.columns, metadata.rows)),
    ];
    if let Some(bits) = metadata.bits_stored {
        rows.push(("Bits stored", bits.to_string()));
    }
    if let Some(params) = params {
        rows.push(("Window Center", params.center_label()));
        rows.push(("Window Width", params.width_label()));
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn server_values_are_shown_as_received() {
        let metadata: StudyMetadata = serde_json::from_value(json!({
            "patient_name": "DOE^JANE",
            "patient_id": "P-17",
            "study_date": "20240102",
            "modality": "MR",
            "rows": 256,
            "columns": 512
        }))
        .unwrap();

        let rows = metadata_rows(&metadata, Some(WindowParameters::new(40.4, 400.0)));
        assert_eq!(
            rows,
            vec![
                ("Patient", "DOE^JANE".to_string()),
                ("ID", "P-17".to_string()),
                ("Date", "20240102".to_string()),
                ("Modality", "MR".to_string()),
                ("Size", "512 x 256".to_string()),
                ("Window Center", "40".to_string()),
                ("Window Width", "400".to_string()),
            ]
        );
    }
}
