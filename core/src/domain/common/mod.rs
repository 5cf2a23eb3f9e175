use std::path::PathBuf;

use rand::{Rng, distributions::Alphanumeric};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct PurilensConfig {
    pub llm: LlmConfig,
    pub upload: UploadConfig,
}

#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct UploadConfig {
    pub dir: PathBuf,
}

pub fn generate_random_string(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
