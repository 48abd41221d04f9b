//! Main entry point for the country-names CLI tool
//!
//! Loads the code tables and the translation dataset once, then answers
//! selections from arguments, a terminal or a pipe.

use clap::Parser;
use country_names::cli::Cli;
use country_names::config::AppConfig;
use country_names::prelude::*;

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    info!("Starting country-names v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!("Failed to load config: {}, using defaults", e);
        AppConfig::default()
    });

    // Execute CLI logic
    cli.run(config).context("country-names failed")?;

    Ok(())
}
