use std::path::PathBuf;

use clap::Parser;
use purilens_core::domain::common::{LlmConfig, PurilensConfig, UploadConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "purilens-api", about = "Food purine analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub upload: UploadArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    /// Bearer credential for the vision endpoint. Absence fails closed.
    #[arg(long, env = "ARK_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// Endpoint id of the vision model.
    #[arg(long, env = "ARK_MODEL_ID", default_value = "")]
    pub model_id: String,

    #[arg(
        long,
        env = "ARK_BASE_URL",
        default_value = "https://ark.cn-beijing.volces.com/api/v3"
    )]
    pub base_url: String,

    #[arg(long, env = "ARK_TIMEOUT_SECS", default_value_t = 40)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct UploadArgs {
    /// Directory for transient uploads.
    #[arg(long = "upload-dir", env = "UPLOAD_DIR", default_value = "uploads")]
    pub dir: PathBuf,
}

impl From<Args> for PurilensConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LlmConfig {
                api_key: args.llm.api_key,
                model: args.llm.model_id,
                base_url: args.llm.base_url,
                timeout_secs: args.llm.timeout_secs,
            },
            upload: UploadConfig {
                dir: args.upload.dir,
            },
        }
    }
}
