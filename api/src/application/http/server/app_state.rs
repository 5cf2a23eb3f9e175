use std::sync::Arc;

use purilens_core::application::PurilensService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: PurilensService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: PurilensService) -> Self {
        Self { args, service }
    }
}
