pub mod upload;
pub mod wire;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use upload::UploadFile;
pub use wire::{
    DicomDecodeResponse, PlateDetectResponse, StudyMetadata, WindowAdjustRequest,
    WindowAdjustResponse,
};

pub const PROCESS_DICOM_PATH: &str = "/api/process-dicom";
pub const ADJUST_WINDOW_PATH: &str = "/api/adjust-window";
pub const DETECT_PLATE_PATH: &str = "/api/detect-plate";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unreadable response: {0}")]
    Decode(String),
    #[error("cannot read upload: {0}")]
    Io(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[async_trait]
pub trait ImagingBackend: Send + Sync {
    async fn process_dicom(&self, file: UploadFile) -> Result<DicomDecodeResponse, ApiError>;

    async fn adjust_window(
        &self,
        request: WindowAdjustRequest,
    ) -> Result<WindowAdjustResponse, ApiError>;

    async fn detect_plate(&self, file: UploadFile) -> Result<PlateDetectResponse, ApiError>;
}

pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn upload<T>(&self, path: &str, file: UploadFile) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        log::info!(
            "Uploading {} ({} bytes) to {path}",
            file.file_name,
            file.bytes.len()
        );
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(file.mime)?;
        let form = Form::new().part("file", part);

        let response = self.client.post(self.url(path)).multipart(form).send().await?;
        log::debug!("{path} answered {}", response.status());
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ImagingBackend for HttpBackend {
    async fn process_dicom(&self, file: UploadFile) -> Result<DicomDecodeResponse, ApiError> {
        self.upload(PROCESS_DICOM_PATH, file).await
    }

    async fn adjust_window(
        &self,
        request: WindowAdjustRequest,
    ) -> Result<WindowAdjustResponse, ApiError> {
        let response = self
            .client
            .post(self.url(ADJUST_WINDOW_PATH))
            .json(&request)
            .send()
            .await?;
        Ok(response.json::<WindowAdjustResponse>().await?)
    }

    async fn detect_plate(&self, file: UploadFile) -> Result<PlateDetectResponse, ApiError> {
        self.upload(DETECT_PLATE_PATH, file).await
    }
}
