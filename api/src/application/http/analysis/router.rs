use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

use super::handlers::analyze_image::{__path_analyze_image, analyze_image};
use crate::application::http::server::app_state::AppState;

// 10MB image plus multipart framing overhead.
const MAX_BODY_SIZE: usize = 12 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(paths(analyze_image))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/analyze", state.args.server.root_path),
            post(analyze_image),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
}
