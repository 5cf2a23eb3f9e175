use std::path::PathBuf;

use base64::{Engine as _, engine::general_purpose};

use crate::domain::common::entities::app_errors::CoreError;

/// One uploaded image, exclusively owned by the request that carries it and
/// alive only for the duration of a single analysis call.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub data: Vec<u8>,
    pub mime_type: String,
    /// Original filename suffix including the leading dot, or empty.
    pub extension: String,
}

impl UploadedImage {
    pub fn new(data: Vec<u8>, mime_type: String, extension: String) -> Result<Self, CoreError> {
        if data.is_empty() {
            return Err(CoreError::InvalidInput(
                "uploaded image is empty".to_string(),
            ));
        }
        if !mime_type.starts_with("image/") {
            return Err(CoreError::InvalidInput(format!(
                "unsupported content type: {mime_type}"
            )));
        }

        Ok(Self {
            data,
            mime_type,
            extension,
        })
    }

    /// Transport-ready inline encoding of the image.
    pub fn data_uri(&self) -> String {
        let payload = general_purpose::STANDARD.encode(&self.data);
        format!("data:{};base64,{}", self.mime_type, payload)
    }
}

/// Filesystem handle of a persisted upload, kept for later cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientUpload {
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_a_data_uri_from_bytes_and_mime_type() {
        let image = UploadedImage::new(vec![1, 2, 3], "image/png".to_string(), ".png".to_string())
            .expect("valid image");

        assert_eq!(image.data_uri(), "data:image/png;base64,AQID");
    }

    #[test]
    fn rejects_non_image_content_types() {
        let err = UploadedImage::new(vec![1], "text/plain".to_string(), ".txt".to_string())
            .expect_err("must be rejected");

        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn rejects_empty_payloads() {
        let err = UploadedImage::new(Vec::new(), "image/jpeg".to_string(), ".jpg".to_string())
            .expect_err("must be rejected");

        assert!(matches!(err, CoreError::InvalidInput(_)));
    }
}
