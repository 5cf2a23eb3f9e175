use utoipa::OpenApi;

use crate::application::http::analysis::router::AnalysisApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(title = "PuriLens API"),
    nest(
        (path = "/api", api = AnalysisApiDoc),
    )
)]
pub struct ApiDoc;
