use std::path::Path;

use super::ApiError;

#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_for(Path::new(&file_name));
        Self {
            file_name,
            mime,
            bytes,
        }
    }

    pub fn read(path: &Path) -> Result<Self, ApiError> {
        let bytes = std::fs::read(path)
            .map_err(|err| ApiError::Io(format!("{}: {err}", path.display())))?;
        Ok(Self::new(display_name(path), bytes))
    }
}

pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("dcm") => "application/dicom",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_follows_extension() {
        assert_eq!(mime_for(Path::new("car.JPG")), "image/jpeg");
        assert_eq!(mime_for(Path::new("scan.dcm")), "application/dicom");
        assert_eq!(mime_for(Path::new("plate.png")), "image/png");
        assert_eq!(mime_for(Path::new("IM0001")), "application/octet-stream");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = UploadFile::read(Path::new("/nonexistent/visiondesk/scan.dcm")).unwrap_err();
        assert!(matches!(err, ApiError::Io(_)));
    }
}
