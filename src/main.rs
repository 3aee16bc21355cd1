use clap::Parser;
use notion_fetch::utils::{logger, validation::Validate};
use notion_fetch::{CliConfig, FetchEngine, LocalStorage, NotionPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting notion-fetch CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 創建存儲和管道
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = NotionPipeline::new(storage, config);

    let engine = FetchEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Page fetch completed successfully!");
            tracing::info!("📁 Data saved to: {}", output_path);
            println!("✅ Data saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Page fetch failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            eprintln!("Failed to fetch Notion page");
        }
    }

    Ok(())
}
