//! DICOM upload plus the window/level interaction loop.
//!
//! The flow owns the loaded study: the handle returned by the decode call is
//! kept untouched and replayed on every adjustment, while the two window
//! parameters follow the sliders. Adjustment responses are ordered by a
//! per-study sequence number so a slow, older render can never replace a
//! newer one.

use std::path::PathBuf;

use crate::api::{
    ApiError, DicomDecodeResponse, StudyMetadata, WindowAdjustRequest, WindowAdjustResponse,
};
use crate::model::{
    DecodedImageHandle, FailureReport, FileSelection, OutcomePanel, RenderedImage,
    ValidationError, WindowBounds, WindowParameters,
};

pub const MISSING_FILE_ALERT: &str = "Please choose a DICOM file!";
pub const SUCCESS_TITLE: &str = "DICOM processed successfully!";
pub const REJECTED_TITLE: &str = "DICOM processing error";
pub const REJECTED_FALLBACK: &str = "The server could not process this file";
pub const TRANSPORT_TITLE: &str = "Error";

#[derive(Debug, Clone)]
pub struct DicomStudyView {
    pub image: RenderedImage,
    pub metadata: StudyMetadata,
}

#[derive(Debug, Clone)]
pub struct LoadedStudy {
    pub handle: DecodedImageHandle,
    pub params: WindowParameters,
    pub bounds: WindowBounds,
    generation: u64,
    issued_sequence: u64,
    resolved_sequence: u64,
}

#[derive(Debug, Clone, Default)]
pub enum WindowingState {
    #[default]
    Idle,
    Loaded(LoadedStudy),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjustTicket {
    generation: u64,
    sequence: u64,
}

impl AdjustTicket {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

#[derive(Debug, Default)]
pub struct DicomFlow {
    pub selection: FileSelection,
    panel: OutcomePanel<DicomStudyView>,
    state: WindowingState,
    generation: u64,
}

impl DicomFlow {
    pub fn panel(&self) -> &OutcomePanel<DicomStudyView> {
        &self.panel
    }

    pub fn state(&self) -> &WindowingState {
        &self.state
    }

    pub fn loaded(&self) -> Option<&LoadedStudy> {
        match &self.state {
            WindowingState::Loaded(study) => Some(study),
            WindowingState::Idle => None,
        }
    }

    pub fn select(&mut self, path: Option<PathBuf>) {
        self.selection.choose(path);
    }

    /// Validates the selection and starts a new load. Any study loaded so far
    /// is dropped, together with its pending adjustments.
    pub fn submit(
        &mut self,
        max_upload_bytes: u64,
    ) -> Result<(PathBuf, LoadTicket), ValidationError> {
        let path = self.selection.validate(max_upload_bytes)?.to_path_buf();
        self.generation += 1;
        self.state = WindowingState::Idle;
        self.panel = OutcomePanel::Loading;
        Ok((
            path,
            LoadTicket {
                generation: self.generation,
            },
        ))
    }

    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<DicomDecodeResponse, ApiError>,
    ) {
        if ticket.generation != self.generation {
            log::debug!(
                "Discarding decode response for superseded load {}",
                ticket.generation
            );
            return;
        }

        match result {
            Ok(response) if response.success => match self.load_study(response) {
                Ok(()) => {}
                Err(message) => {
                    log::error!("{message}");
                    self.panel =
                        OutcomePanel::Failure(FailureReport::new(TRANSPORT_TITLE, message));
                }
            },
            Ok(response) => {
                let message = response
                    .error
                    .unwrap_or_else(|| REJECTED_FALLBACK.to_string());
                log::warn!("DICOM decode rejected: {message}");
                self.panel = OutcomePanel::Failure(
                    FailureReport::new(REJECTED_TITLE, message).with_image(response.image),
                );
            }
            Err(err) => {
                log::error!("DICOM upload failed: {err}");
                self.panel =
                    OutcomePanel::Failure(FailureReport::new(TRANSPORT_TITLE, err.to_string()));
            }
        }
    }

    fn load_study(&mut self, response: DicomDecodeResponse) -> Result<(), String> {
        let image = response
            .image
            .ok_or_else(|| "incomplete response: missing image".to_string())?;
        let metadata = response
            .metadata
            .ok_or_else(|| "incomplete response: missing metadata".to_string())?;

        let params = WindowParameters::new(
            response
                .window_center
                .unwrap_or(WindowParameters::DEFAULT_CENTER),
            response
                .window_width
                .unwrap_or(WindowParameters::DEFAULT_WIDTH),
        );
        let half_width = params.width / 2.0;
        let bounds = WindowBounds::from_intensity_range(
            response.min_value.unwrap_or(params.center - half_width),
            response.max_value.unwrap_or(params.center + half_width),
            params.width,
        );

        log::info!(
            "Loaded {} study {}x{} (window {}/{})",
            metadata.modality,
            metadata.columns,
            metadata.rows,
            params.center_label(),
            params.width_label()
        );

        self.state = WindowingState::Loaded(LoadedStudy {
            handle: DecodedImageHandle::new(image.clone()),
            params,
            bounds,
            generation: self.generation,
            issued_sequence: 0,
            resolved_sequence: 0,
        });
        self.panel = OutcomePanel::Success(DicomStudyView {
            image: RenderedImage::from_source(image),
            metadata,
        });
        Ok(())
    }

    pub fn adjust(
        &mut self,
        center: f64,
        width: f64,
    ) -> Option<(AdjustTicket, WindowAdjustRequest)> {
        let WindowingState::Loaded(study) = &mut self.state else {
            return None;
        };

        study.params = WindowParameters::new(center, width);
        study.issued_sequence += 1;

        let ticket = AdjustTicket {
            generation: study.generation,
            sequence: study.issued_sequence,
        };
        let request = WindowAdjustRequest {
            image_data: study.handle.as_str().to_string(),
            window_center: center,
            window_width: width,
        };
        Some((ticket, request))
    }

    /// Applies a render unless a newer request has already resolved, whatever
    /// its outcome. Failures are only logged. Returns whether the displayed
    /// image changed.
    pub fn finish_adjust(
        &mut self,
        ticket: AdjustTicket,
        result: Result<WindowAdjustResponse, ApiError>,
    ) -> bool {
        let WindowingState::Loaded(study) = &mut self.state else {
            log::debug!("Ignoring window adjustment without a loaded study");
            return false;
        };
        if study.generation != ticket.generation {
            log::debug!("Ignoring window adjustment for a replaced study");
            return false;
        }
        if ticket.sequence <= study.resolved_sequence {
            log::debug!(
                "Discarding stale window render #{} (#{} already resolved)",
                ticket.sequence,
                study.resolved_sequence
            );
            return false;
        }
        study.resolved_sequence = ticket.sequence;

        let image = match result {
            Ok(WindowAdjustResponse {
                success: true,
                image: Some(image),
                ..
            }) => image,
            Ok(response) => {
                log::warn!(
                    "Window adjustment rejected: {}",
                    response.error.as_deref().unwrap_or("no image returned")
                );
                return false;
            }
            Err(err) => {
                log::warn!("Error adjusting window: {err}");
                return false;
            }
        };

        let Some(view) = self.panel.success_mut() else {
            return false;
        };
        view.image = RenderedImage::from_source(image);
        true
    }
}
