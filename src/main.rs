//! Quote fetcher CLI application.

use anyhow::{Context, Result};
use clap::Parser;
use quote_fetcher::{AnimechanClient, Config, LogConfig, ResultRecord};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = Config::from_file(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    // Initialize logging
    let log_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        config.logging.level()
    };

    quote_fetcher::logging::init(LogConfig {
        log_dir: config.log_dir().to_string_lossy().to_string(),
        component: "quote-fetcher".to_string(),
        default_level: log_level,
        console: config.logging.console,
        file: config.logging.file,
        json_format: config.logging.json_format,
    })?;

    info!("Quote fetcher starting");
    info!(base_url = %config.api.base_url, "Using endpoint");

    // Initialize API client
    let client = AnimechanClient::new(config.api.base_url.clone())
        .context("Failed to create Animechan client")?;

    let quote = client
        .fetch_random_quote()
        .await
        .context("Failed to fetch quote")?;

    // Diagnostic write: the parsed quote object
    println!("{}", serde_json::to_string_pretty(&quote)?);

    let record = ResultRecord::from(quote);
    info!(anime = %record.anime, character = %record.character, "Quote fetched");

    // Primary result: the flattened record, final line of output
    println!("{}", serde_json::to_string(&record)?);

    Ok(())
}
