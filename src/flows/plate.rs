use std::path::PathBuf;

use crate::api::{ApiError, PlateDetectResponse};
use crate::model::{FailureReport, FileSelection, OutcomePanel, RenderedImage, ValidationError};
use crate::utils::format_confidence;

pub const MISSING_FILE_ALERT: &str = "Please choose an image!";
pub const SUCCESS_TITLE: &str = "Plate detected!";
pub const REJECTED_TITLE: &str = "No license plate detected";
pub const REJECTED_FALLBACK: &str = "Please try another image";
pub const TRANSPORT_TITLE: &str = "Processing error";

#[derive(Debug, Clone)]
pub struct PlateDetection {
    pub plate_number: String,
    pub confidence: f64,
    pub method: String,
    pub image: Option<RenderedImage>,
}

impl PlateDetection {
    pub fn confidence_label(&self) -> String {
        format_confidence(self.confidence)
    }
}

#[derive(Debug, Default)]
pub struct PlateFlow {
    pub selection: FileSelection,
    panel: OutcomePanel<PlateDetection>,
}

impl PlateFlow {
    pub fn panel(&self) -> &OutcomePanel<PlateDetection> {
        &self.panel
    }

    pub fn select(&mut self, path: Option<PathBuf>) {
        self.selection.choose(path);
    }

    /// On success the panel is already showing the loading state and the
    /// caller owns the upload of the returned path.
    pub fn submit(&mut self, max_upload_bytes: u64) -> Result<PathBuf, ValidationError> {
        let path = self.selection.validate(max_upload_bytes)?.to_path_buf();
        self.panel = OutcomePanel::Loading;
        Ok(path)
    }

    pub fn finish(&mut self, result: Result<PlateDetectResponse, ApiError>) {
        self.panel = match result {
            Ok(response) if response.success => detection_panel(response),
            Ok(response) => {
                let message = response
                    .error
                    .unwrap_or_else(|| REJECTED_FALLBACK.to_string());
                log::info!("Plate detection rejected: {message}");
                OutcomePanel::Failure(
                    FailureReport::new(REJECTED_TITLE, message).with_image(response.image),
                )
            }
            Err(err) => {
                log::error!("Plate detection request failed: {err}");
                OutcomePanel::Failure(FailureReport::new(TRANSPORT_TITLE, err.to_string()))
            }
        };
    }
}

fn detection_panel(response: PlateDetectResponse) -> OutcomePanel<PlateDetection> {
    let Some(plate_number) = response.plate_number else {
        return OutcomePanel::Failure(
            FailureReport::new(TRANSPORT_TITLE, "incomplete response: missing plate_number")
                .with_image(response.image),
        );
    };

    let detection = PlateDetection {
        plate_number,
        confidence: response.confidence.unwrap_or(0.0),
        method: response.method.unwrap_or_else(|| "unknown".to_string()),
        image: response.image.map(RenderedImage::from_source),
    };
    log::info!(
        "Detected plate {} ({}) via {}",
        detection.plate_number,
        detection.confidence_label(),
        detection.method
    );
    OutcomePanel::Success(detection)
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE: &str = "data:image/jpeg;base64,/9j/4A==";

    fn response(success: bool) -> PlateDetectResponse {
        PlateDetectResponse {
            success,
            error: None,
            image: None,
            plate_number: None,
            confidence: None,
            method: None,
        }
    }

    #[test]
    fn submit_without_file_is_rejected_before_upload() {
        let mut flow = PlateFlow::default();
        assert_eq!(flow.submit(1024), Err(ValidationError::NoFileSelected));
        assert!(matches!(flow.panel(), OutcomePanel::Hidden));
    }

    #[test]
    fn success_renders_plate_and_percentage() {
        let mut flow = PlateFlow::default();
        flow.finish(Ok(PlateDetectResponse {
            image: Some(IMAGE.to_string()),
            plate_number: Some("51F-123.45".to_string()),
            confidence: Some(0.873),
            method: Some("YOLO".to_string()),
            ..response(true)
        }));

        let detection = flow.panel().success().unwrap();
        assert_eq!(detection.plate_number, "51F-123.45");
        assert_eq!(detection.confidence_label(), "87.3%");
        assert_eq!(detection.method, "YOLO");
        assert_eq!(detection.image.as_ref().unwrap().source, IMAGE);
    }

    #[test]
    fn rejection_shows_server_message_and_image() {
        let mut flow = PlateFlow::default();
        flow.finish(Ok(PlateDetectResponse {
            error: Some("no plate found".to_string()),
            image: Some(IMAGE.to_string()),
            ..response(false)
        }));

        let report = flow.panel().failure().unwrap();
        assert_eq!(report.title, REJECTED_TITLE);
        assert_eq!(report.message, "no plate found");
        assert_eq!(report.image.as_ref().unwrap().source, IMAGE);
    }

    #[test]
    fn rejection_without_message_uses_fallback() {
        let mut flow = PlateFlow::default();
        flow.finish(Ok(response(false)));

        let report = flow.panel().failure().unwrap();
        assert_eq!(report.message, REJECTED_FALLBACK);
        assert!(report.image.is_none());
    }

    #[test]
    fn transport_failure_shows_error_text() {
        let mut flow = PlateFlow::default();
        flow.finish(Err(ApiError::Transport("connection refused".to_string())));

        let report = flow.panel().failure().unwrap();
        assert_eq!(report.title, TRANSPORT_TITLE);
        assert_eq!(report.message, "request failed: connection refused");
    }

    #[test]
    fn success_without_plate_text_is_a_failure() {
        let mut flow = PlateFlow::default();
        flow.finish(Ok(response(true)));
        assert!(flow.panel().failure().is_some());
    }
}
