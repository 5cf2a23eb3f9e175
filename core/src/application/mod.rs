use crate::domain::common::{PurilensConfig, services::Service};
use crate::infrastructure::{llm::ArkVisionClient, storage::TempUploadStore};

pub type PurilensService = Service<ArkVisionClient, TempUploadStore>;

/// Wires the production adapters into the pipeline service.
pub fn create_service(config: PurilensConfig) -> anyhow::Result<PurilensService> {
    let vision_client = ArkVisionClient::new(config.llm)?;
    let upload_store = TempUploadStore::new(config.upload);

    Ok(Service::new(vision_client, upload_store))
}
