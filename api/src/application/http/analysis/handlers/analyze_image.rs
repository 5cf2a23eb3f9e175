use axum::extract::{Multipart, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use purilens_core::domain::analysis::{
    entities::FoodItem, ports::AnalysisService, value_objects::AnalyzeImageInput,
};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeImageResponse {
    pub foods: Vec<FoodItem>,
    /// Present and `true` only on the fallback path.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_mock: bool,
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "analysis",
    summary = "Analyze food from image",
    description = "Detects food on the uploaded photo, estimates purine content per item and assigns a gout risk tier.",
    responses(
        (status = 200, body = AnalyzeImageResponse),
        (status = 400, body = ErrorResponse),
        (status = 500, body = ErrorResponse)
    ),
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<AnalyzeImageResponse>, ApiError> {
    let mut image: Option<(Vec<u8>, String, String)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name != "image" {
            continue;
        }

        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let extension = field.file_name().and_then(file_extension).unwrap_or_default();

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        if data.len() > MAX_IMAGE_SIZE {
            return Err(ApiError::BadRequest(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        image = Some((data.to_vec(), mime_type, extension));
    }

    let (image_data, mime_type, extension) =
        image.ok_or_else(|| ApiError::BadRequest("Please upload an image".to_string()))?;

    let result = state
        .service
        .analyze_image(AnalyzeImageInput {
            image_data,
            mime_type,
            extension,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeImageResponse {
        foods: result.foods,
        is_mock: result.is_mock,
    }))
}

fn file_extension(filename: &str) -> Option<String> {
    std::path::Path::new(filename)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
}
