use clap::{Parser, ValueEnum};

use crate::model::Workspace;

pub const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";
pub const DEFAULT_MAX_UPLOAD_MB: u64 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StartWorkspace {
    Plate,
    Dicom,
}

impl From<StartWorkspace> for Workspace {
    fn from(value: StartWorkspace) -> Self {
        match value {
            StartWorkspace::Plate => Workspace::Plate,
            StartWorkspace::Dicom => Workspace::Dicom,
        }
    }
}

/// Desktop client for license-plate detection and DICOM windowing.
#[derive(Debug, Clone, Parser)]
#[command(name = "visiondesk", version, about)]
pub struct Config {
    /// Base URL of the imaging server
    #[arg(long, env = "VISIONDESK_SERVER", default_value = DEFAULT_SERVER)]
    pub server: String,

    /// Largest file accepted for upload, in MiB
    #[arg(long, env = "VISIONDESK_MAX_UPLOAD_MB", default_value_t = DEFAULT_MAX_UPLOAD_MB)]
    pub max_upload_mb: u64,

    /// Workspace shown at startup
    #[arg(long, value_enum, default_value_t = StartWorkspace::Plate)]
    pub workspace: StartWorkspace,
}

impl Config {
    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            max_upload_mb: DEFAULT_MAX_UPLOAD_MB,
            workspace: StartWorkspace::Plate,
        }
    }
}
