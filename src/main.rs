use clap::Parser;
use quake_map::constants::OUTPUT_FILENAME;
use quake_map::core::renderer::init_map;
use quake_map::core::Storage;
use quake_map::utils::{logger, validation::Validate};
use quake_map::{CliConfig, HttpFeedSource, LeafletMap, LocalStorage, QuakeMapEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting quake-map");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let mut map = LeafletMap::new();
    init_map(&mut map);

    let engine =
        QuakeMapEngine::new_with_monitoring(HttpFeedSource::from_config(&config), config.monitor);

    // 失敗時 engine 已記錄錯誤，底圖照樣輸出
    let outcome = engine.run(&mut map).await;

    let storage = LocalStorage::new(config.output_path.clone());
    storage
        .write_file(OUTPUT_FILENAME, map.to_html()?.as_bytes())
        .await?;
    let output_file = storage.full_path(OUTPUT_FILENAME);
    tracing::info!("📁 Map saved to: {}", output_file.display());

    match outcome {
        Ok(summary) => {
            println!(
                "✅ Plotted {} earthquakes: {}",
                summary.markers,
                output_file.display()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
