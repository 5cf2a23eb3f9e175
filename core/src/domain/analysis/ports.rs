use std::future::Future;

use crate::domain::{
    analysis::{
        entities::{AnalysisResult, TransientUpload, UploadedImage},
        value_objects::AnalyzeImageInput,
    },
    common::entities::app_errors::CoreError,
};

/// Client trait for the external vision-capable completion endpoint
#[cfg_attr(test, mockall::automock)]
pub trait VisionClient: Send + Sync {
    /// Sends one image with the two-part instruction and returns the raw
    /// text of the model's first completion.
    fn complete_with_image(
        &self,
        system_prompt: String,
        user_prompt: String,
        image_data_uri: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Store trait for transient uploads
#[cfg_attr(test, mockall::automock)]
pub trait UploadStore: Send + Sync {
    /// Persists the image under a collision-resistant name and returns a
    /// stable handle for later cleanup.
    fn persist(
        &self,
        image: &UploadedImage,
    ) -> impl Future<Output = Result<TransientUpload, CoreError>> + Send;

    /// Idempotent: removing an already-absent upload is not an error.
    fn remove(
        &self,
        upload: &TransientUpload,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for the analysis pipeline
#[cfg_attr(test, mockall::automock)]
pub trait AnalysisService: Send + Sync {
    fn analyze_image(
        &self,
        input: AnalyzeImageInput,
    ) -> impl Future<Output = Result<AnalysisResult, CoreError>> + Send;
}
