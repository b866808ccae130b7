use clap::Parser;
use quake_map::utils::{logger, validation::Validate};
use quake_map::{CliConfig, LocalStorage, MapEngine, QuakeMapPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting quake-map");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = QuakeMapPipeline::new(storage, config);

    let engine = MapEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Map generated successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("Map generation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
