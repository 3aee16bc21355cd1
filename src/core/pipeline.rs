use crate::core::{ConfigProvider, PageDataRequest, PageId, Pipeline, Storage};
use crate::utils::error::{FetchError, Result};
use reqwest::{header, Client};
use serde_json::Value;
use std::time::Duration;

/// 與原始抓取流程相同的固定User-Agent
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

pub const OUTPUT_FILE: &str = "notion_data.json";

pub struct NotionPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> NotionPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for NotionPipeline<S, C> {
    async fn resolve(&self) -> Result<PageId> {
        let url = self.config.share_url();
        tracing::debug!("Extracting page ID from: {}", url);

        PageId::from_url(url).ok_or_else(|| FetchError::PageIdNotFound {
            url: url.to_string(),
        })
    }

    async fn fetch(&self, page_id: &PageId) -> Result<Value> {
        let payload = PageDataRequest::block_space(page_id);

        tracing::debug!("Making API request to: {}", self.config.api_endpoint());
        let response = self
            .client
            .post(self.config.api_endpoint())
            .header(header::USER_AGENT, USER_AGENT)
            .timeout(Duration::from_secs(self.config.timeout_secs()))
            .json(&payload)
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());

        // 非2xx也視為請求失敗
        let data = response.error_for_status()?.json::<Value>().await?;
        Ok(data)
    }

    async fn persist(&self, data: &Value) -> Result<String> {
        // serde_json保留非ASCII字符原樣輸出
        let json = serde_json::to_string_pretty(data)?;

        tracing::debug!("Writing {} bytes to storage", json.len());
        self.storage.write_file(OUTPUT_FILE, json.as_bytes()).await?;

        Ok(format!("{}/{}", self.config.output_path(), OUTPUT_FILE))
    }
}
