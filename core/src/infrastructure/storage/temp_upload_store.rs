use std::path::PathBuf;

use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::domain::{
    analysis::{
        entities::{TransientUpload, UploadedImage},
        ports::UploadStore,
    },
    common::{UploadConfig, entities::app_errors::CoreError, generate_random_string},
};

/// Filesystem store for uploads that live only for the duration of one
/// analysis call.
#[derive(Debug, Clone)]
pub struct TempUploadStore {
    dir: PathBuf,
}

impl TempUploadStore {
    pub fn new(config: UploadConfig) -> Self {
        Self { dir: config.dir }
    }
}

impl UploadStore for TempUploadStore {
    async fn persist(&self, image: &UploadedImage) -> Result<TransientUpload, CoreError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(storage_error)?;

        // Collision-resistant name: concurrent uploads must never overwrite
        // one another.
        let filename = format!(
            "{}-{}{}",
            Utc::now().timestamp_millis(),
            generate_random_string(8),
            image.extension
        );
        let path = self.dir.join(filename);

        tokio::fs::write(&path, &image.data)
            .await
            .map_err(storage_error)?;

        let checksum = format!("{:x}", Sha256::digest(&image.data));
        tracing::debug!(
            path = %path.display(),
            size = image.data.len(),
            %checksum,
            "stored transient upload"
        );

        Ok(TransientUpload { path })
    }

    async fn remove(&self, upload: &TransientUpload) -> Result<(), CoreError> {
        match tokio::fs::try_exists(&upload.path).await {
            Ok(true) => tokio::fs::remove_file(&upload.path)
                .await
                .map_err(storage_error),
            Ok(false) => Ok(()),
            Err(err) => Err(storage_error(err)),
        }
    }
}

fn storage_error(err: std::io::Error) -> CoreError {
    CoreError::Storage(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> TempUploadStore {
        TempUploadStore::new(UploadConfig {
            dir: std::env::temp_dir().join(format!("purilens-store-{}", generate_random_string(12))),
        })
    }

    fn image() -> UploadedImage {
        UploadedImage::new(vec![1, 2, 3], "image/png".to_string(), ".png".to_string())
            .expect("valid image")
    }

    #[tokio::test]
    async fn persists_and_removes_an_upload() {
        let store = store();

        let upload = store.persist(&image()).await.expect("persisted");
        assert!(upload.path.exists());
        assert_eq!(upload.path.extension().and_then(|e| e.to_str()), Some("png"));

        store.remove(&upload).await.expect("removed");
        assert!(!upload.path.exists());
    }

    #[tokio::test]
    async fn removal_is_idempotent() {
        let store = store();

        let upload = store.persist(&image()).await.expect("persisted");
        store.remove(&upload).await.expect("removed");
        store.remove(&upload).await.expect("second removal is a no-op");
    }

    #[tokio::test]
    async fn concurrent_uploads_get_distinct_paths() {
        let store = store();

        let first = store.persist(&image()).await.expect("persisted");
        let second = store.persist(&image()).await.expect("persisted");

        assert_ne!(first.path, second.path);

        store.remove(&first).await.expect("removed");
        store.remove(&second).await.expect("removed");
    }
}
