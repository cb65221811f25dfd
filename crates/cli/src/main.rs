//! Keyword rank tracker.
//!
//! Responsibilities:
//! - Resolve configuration, read the keyword list, and query SerpApi per keyword.
//! - Write the CSV result file and optionally mirror records to Google Sheets.
//!
//! Does NOT handle:
//! - HTTP or rank extraction details (see `crates/client`).
//! - Configuration precedence rules (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` values are visible.
//! - Configuration errors abort before any network request.
//! - Logs go to stderr; stdout carries only the saved-file notice.

mod args;
mod error;
mod keywords;
mod output;
mod sink;
mod tracker;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use error::ExitCode;
use rank_config::{Config, ConfigLoader};
use serp_client::SerpClient;
use sink::SpreadsheetSink;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let exit_code = match run(cli, config).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::GeneralError
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Resolve configuration with environment values taking precedence over the file.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = cli.config_path() {
        loader = loader.with_config_path(path);
    }
    let config = loader.from_file()?.from_env()?.build()?;
    Ok(config)
}

async fn run(cli: Cli, config: Config) -> Result<()> {
    let keywords = keywords::load_keywords(&cli.keywords)?;
    debug!(
        "Loaded {} keywords from {}",
        keywords.len(),
        cli.keywords.display()
    );

    let sink = SpreadsheetSink::select(cli.sheet_name(), config.sheets_credentials.as_deref());

    let client = SerpClient::builder()
        .from_config(&config)
        .build()
        .context("Failed to create SerpApi client")?;

    let records = tracker::track_keywords(&client, &keywords, &config.target_domain).await;

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(output::default_output_path);

    output::write_csv(&records, &output_path)?;
    info!("Wrote {} records", records.len());
    println!("Saved results to {}", output_path.display());

    if let Err(e) = sink.mirror(&records).await {
        error!("Google Sheets update failed: {:#}", e);
    }

    Ok(())
}
