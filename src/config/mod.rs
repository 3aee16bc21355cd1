pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "notion-fetch")]
#[command(about = "Fetch public Notion page data via the v3 API")]
pub struct CliConfig {
    /// Share URL of the page to fetch
    #[arg(
        long,
        default_value = "https://warm-hip-fe9.notion.site/LM-PC-2e0753ebc013807e8c78e7f403e83a90"
    )]
    pub url: String,

    #[arg(long, default_value = "https://www.notion.so/api/v3/getPublicPageData")]
    pub api_endpoint: String,

    #[arg(long, default_value = ".")]
    pub output_path: String,

    #[arg(long, default_value = "10")]
    pub timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn share_url(&self) -> &str {
        &self.url
    }

    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("url", &self.url)?;
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_path("output_path", &self.output_path)?;
        validate_range("timeout_secs", self.timeout_secs, 1, 300)?;
        Ok(())
    }
}
