use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use iced::widget::image::Handle;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ImageDecodeError {
    #[error("data URL is not base64 encoded ({0})")]
    UnsupportedEncoding(String),
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("empty image payload")]
    Empty,
}

#[derive(Debug, Clone)]
pub struct RenderedImage {
    pub source: String,
    pub handle: Option<Handle>,
}

impl RenderedImage {
    pub fn from_source(source: String) -> Self {
        let handle = match decode_data_url(&source) {
            Ok(bytes) => Some(Handle::from_bytes(bytes)),
            Err(err) => {
                log::warn!("Unable to decode image payload: {err}");
                None
            }
        };
        Self { source, handle }
    }
}

/// Accepts `data:<mime>;base64,<payload>` as well as a bare base64 payload.
pub fn decode_data_url(source: &str) -> Result<Vec<u8>, ImageDecodeError> {
    let payload = match source.strip_prefix("data:") {
        Some(rest) => {
            let (header, payload) = rest
                .split_once(',')
                .ok_or_else(|| ImageDecodeError::UnsupportedEncoding(rest.to_string()))?;
            if !header.ends_with(";base64") {
                return Err(ImageDecodeError::UnsupportedEncoding(header.to_string()));
            }
            payload
        }
        None => source,
    };

    let payload = payload.trim();
    if payload.is_empty() {
        return Err(ImageDecodeError::Empty);
    }
    Ok(STANDARD.decode(payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_jpeg_data_url() {
        let bytes = decode_data_url("data:image/jpeg;base64,/9j/4A==").unwrap();
        assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF, 0xE0]);
    }

    #[test]
    fn decodes_bare_payload() {
        assert_eq!(decode_data_url("QUJD").unwrap(), b"ABC".to_vec());
    }

    #[test]
    fn rejects_non_base64_data_url() {
        assert!(matches!(
            decode_data_url("data:text/plain,hello"),
            Err(ImageDecodeError::UnsupportedEncoding(_))
        ));
    }

    #[test]
    fn rejects_empty_payload() {
        assert_eq!(
            decode_data_url("data:image/png;base64,"),
            Err(ImageDecodeError::Empty)
        );
    }

    #[test]
    fn undecodable_source_keeps_text_without_handle() {
        let image = RenderedImage::from_source("data:image/png;base64,@@@".to_string());
        assert_eq!(image.source, "data:image/png;base64,@@@");
        assert!(image.handle.is_none());
    }
}
