use crate::api::{ApiError, DicomDecodeResponse, PlateDetectResponse, WindowAdjustResponse};
use crate::flows::{AdjustTicket, LoadTicket};
use crate::model::Workspace;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    SetWorkspace(Workspace),
    AlertClosed,

    PickPlateImage,
    PlateImagePicked(Option<PathBuf>),
    SubmitPlate,
    PlateDetected(Result<PlateDetectResponse, ApiError>),

    PickDicomFile,
    DicomFilePicked(Option<PathBuf>),
    SubmitDicom,
    DicomLoaded(LoadTicket, Result<DicomDecodeResponse, ApiError>),
    WindowCenterChanged(f64),
    WindowWidthChanged(f64),
    WindowAdjusted(AdjustTicket, Result<WindowAdjustResponse, ApiError>),
}
