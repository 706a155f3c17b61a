use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::api::upload::display_name;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("no file selected")]
    NoFileSelected,
    #[error("{name} is {size} bytes, uploads are limited to {limit} bytes")]
    TooLarge { name: String, size: u64, limit: u64 },
    #[error("cannot read {0}")]
    Unreadable(String),
}

#[derive(Debug, Clone, Default)]
pub struct FileSelection {
    path: Option<PathBuf>,
}

impl FileSelection {
    /// A cancelled picker (`None`) keeps the previous choice.
    pub fn choose(&mut self, path: Option<PathBuf>) {
        if let Some(path) = path {
            log::info!("Selected file: {}", display_name(&path));
            self.path = Some(path);
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn file_name(&self) -> Option<String> {
        self.path.as_deref().map(display_name)
    }

    pub fn validate(&self, max_upload_bytes: u64) -> Result<&Path, ValidationError> {
        let path = self.path.as_deref().ok_or(ValidationError::NoFileSelected)?;
        let metadata = std::fs::metadata(path)
            .map_err(|err| ValidationError::Unreadable(format!("{}: {err}", path.display())))?;
        if !metadata.is_file() {
            return Err(ValidationError::Unreadable(format!(
                "{} is not a regular file",
                path.display()
            )));
        }
        if metadata.len() > max_upload_bytes {
            return Err(ValidationError::TooLarge {
                name: display_name(path),
                size: metadata.len(),
                limit: max_upload_bytes,
            });
        }
        Ok(path)
    }
}
