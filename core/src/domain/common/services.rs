/// Aggregate service over the pipeline's ports. Adapters are injected at
/// construction so the pipeline stays testable with fakes.
#[derive(Debug, Clone)]
pub struct Service<V, U> {
    pub(crate) vision_client: V,
    pub(crate) upload_store: U,
}

impl<V, U> Service<V, U> {
    pub fn new(vision_client: V, upload_store: U) -> Self {
        Self {
            vision_client,
            upload_store,
        }
    }
}
