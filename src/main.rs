use clap::Parser;
use std::time::Duration;
use teams_sweep::core::{engine::SweepEngine, loader};
use teams_sweep::utils::{logger, validation::Validate};
use teams_sweep::{CliConfig, TeamsApi};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting teams-sweep");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    println!("🚀 Teams App Bulk Deletion Tool");
    println!("{}", "=".repeat(50));

    // Config problems abort before any file or network I/O.
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ Error: {}", e);
        return;
    }

    println!("📁 Reading from: {}", config.json_file_path);
    println!("🌐 API Endpoint: {}", config.api_endpoint);
    println!(
        "🔑 Bearer Token: {}",
        if config.bearer_token.is_empty() {
            "[BLANK]"
        } else {
            "[SET]"
        }
    );

    let app_ids = loader::extract_app_ids(&config.json_file_path);

    if app_ids.is_empty() {
        eprintln!("❌ No Teams app IDs found or error reading file.");
        return;
    }

    println!("\n📋 Found {} Teams apps to delete:", app_ids.len());
    for (i, app_id) in app_ids.iter().enumerate() {
        println!("   {:2}. {}", i + 1, app_id);
    }

    println!("\n🗑️  Starting deletion process...");
    println!("{}", "=".repeat(50));

    let api = TeamsApi::new(
        config.api_endpoint.clone(),
        config.bearer_token.clone(),
        Duration::from_secs(config.request_timeout_seconds),
    );
    let engine = SweepEngine::new(api, Duration::from_secs(config.request_delay_seconds));

    let report = engine.run(&app_ids).await;
    report.print_summary();
}
