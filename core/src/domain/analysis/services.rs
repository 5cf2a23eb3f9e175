use tracing::instrument;

use crate::domain::{
    analysis::{
        entities::{AnalysisResult, FoodItem, UploadedImage},
        fallback,
        parser::{self, ParsedFood},
        ports::{AnalysisService, UploadStore, VisionClient},
        prompt,
        value_objects::{AnalyzeImageInput, resolve_risk_level},
    },
    common::{entities::app_errors::CoreError, services::Service},
};

/// Named pipeline stages. Every run walks them in order; the degraded and
/// error branches are taken from `Querying` onwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PipelineStage {
    Ingesting,
    Querying,
    Parsing,
    Classifying,
    Responding,
}

fn enter(stage: PipelineStage) {
    tracing::debug!(?stage, "pipeline stage");
}

impl<V, U> AnalysisService for Service<V, U>
where
    V: VisionClient,
    U: UploadStore,
{
    #[instrument(skip(self, input), fields(mime_type = %input.mime_type, size = input.image_data.len()))]
    async fn analyze_image(&self, input: AnalyzeImageInput) -> Result<AnalysisResult, CoreError> {
        enter(PipelineStage::Ingesting);
        let image = UploadedImage::new(input.image_data, input.mime_type, input.extension)?;
        let upload = self.upload_store.persist(&image).await?;

        let outcome = self.run_pipeline(&image).await;

        // The transient upload never outlives the request, on any path.
        // Cleanup failures are logged but never mask the pipeline outcome.
        if let Err(err) = self.upload_store.remove(&upload).await {
            tracing::warn!(%err, path = %upload.path.display(), "failed to remove transient upload");
        }

        outcome
    }
}

impl<V, U> Service<V, U>
where
    V: VisionClient,
    U: UploadStore,
{
    async fn run_pipeline(&self, image: &UploadedImage) -> Result<AnalysisResult, CoreError> {
        enter(PipelineStage::Querying);
        let raw = match self
            .vision_client
            .complete_with_image(
                prompt::SYSTEM_PROMPT.to_string(),
                prompt::USER_PROMPT.to_string(),
                image.data_uri(),
            )
            .await
        {
            Ok(raw) => raw,
            Err(err) if err.is_degraded() => {
                tracing::warn!(%err, "vision endpoint degraded, serving demonstration result");
                return Ok(fallback::demo_result());
            }
            Err(err) => return Err(err),
        };

        tracing::debug!(reply = %raw, "raw model reply");

        enter(PipelineStage::Parsing);
        let parsed = parser::parse_model_reply(&raw)?;

        enter(PipelineStage::Classifying);
        let foods = parsed.into_iter().map(classify_and_normalize).collect();

        enter(PipelineStage::Responding);
        Ok(AnalysisResult::new(foods))
    }
}

fn classify_and_normalize(parsed: ParsedFood) -> FoodItem {
    let level = resolve_risk_level(parsed.level.as_deref(), parsed.purine_value);

    if level.requires_bbox() && parsed.bbox.is_none() {
        // Accepted: the item is listed without a highlight region.
        tracing::debug!(name = %parsed.name, ?level, "model omitted the bbox for a highlighted tier");
    }

    FoodItem {
        name: parsed.name,
        purine_value: parsed.purine_value,
        level,
        bbox: parsed.bbox,
        region: parsed.bbox.map(|b| b.to_region()),
        description: parsed.description,
    }
}
