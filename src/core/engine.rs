use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct FetchEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> FetchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting fetch process...");

        // Resolve
        println!("Resolving page ID...");
        let page_id = self.pipeline.resolve().await?;
        println!("Resolved page ID: {}", page_id);

        // Fetch
        println!("Fetching page data...");
        let data = self.pipeline.fetch(&page_id).await?;
        tracing::debug!(
            "Fetched page data with {} top-level fields",
            data.as_object().map_or(0, |obj| obj.len())
        );

        // Persist
        println!("Saving page data...");
        let output_path = self.pipeline.persist(&data).await?;
        println!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
