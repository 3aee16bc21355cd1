use crate::domain::model::PageId;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn share_url(&self) -> &str;
    fn api_endpoint(&self) -> &str;
    fn output_path(&self) -> &str;
    fn timeout_secs(&self) -> u64;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn resolve(&self) -> Result<PageId>;
    async fn fetch(&self, page_id: &PageId) -> Result<serde_json::Value>;
    async fn persist(&self, data: &serde_json::Value) -> Result<String>;
}
