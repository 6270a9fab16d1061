//! assetflow CLI - Command Line Operations for Asset Depreciation
//!
//! This is the operational entry point for the assetflow depreciation library.
//!
//! # Commands
//!
//! - `assetflow schedule --asset <file>` - Compute the remaining depreciation schedule
//! - `assetflow dates --asset <file>` - List the remaining depreciation dates
//! - `assetflow check --asset <file>` - Validate an asset file
//!
//! # Configuration
//!
//! Settings are resolved from CLI flags, then `ASSETFLOW_*` environment
//! variables, then the config file (`assetflow.toml` by default), then
//! built-in defaults.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod input;

use error::Result;

use config::{build_config, CliArgs};

/// assetflow depreciation schedule CLI
#[derive(Parser)]
#[command(name = "assetflow")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the remaining depreciation schedule of an asset
    Schedule {
        /// Path to asset file (TOML/JSON)
        #[arg(short, long, value_name = "FILE")]
        asset: PathBuf,

        /// Output format (table, json, csv)
        #[arg(short, long)]
        format: Option<String>,

        /// Currency code, overriding the asset file and configuration
        #[arg(long)]
        currency: Option<String>,
    },

    /// List the remaining depreciation dates of an asset
    Dates {
        /// Path to asset file (TOML/JSON)
        #[arg(short, long, value_name = "FILE")]
        asset: PathBuf,
    },

    /// Validate an asset file and report its depreciable basis
    Check {
        /// Path to asset file (TOML/JSON)
        #[arg(short, long, value_name = "FILE")]
        asset: PathBuf,
    },
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let format = match &cli.command {
        Commands::Schedule { format, .. } => format.clone(),
        _ => None,
    };
    let log_level = if cli.verbose {
        Some("debug".to_string())
    } else {
        cli.log_level.clone()
    };
    let config = build_config(&CliArgs {
        config_file: cli.config.clone(),
        log_level,
        format,
    })?;

    init_tracing(config.log_level.as_filter_str());

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(
        currency = %config.currency,
        rounding = %config.rounding,
        log_level = %config.log_level,
        format = %config.format,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Schedule {
            asset, currency, ..
        } => commands::schedule::run(&asset, currency.as_deref(), &config)?,
        Commands::Dates { asset } => commands::dates::run(&asset)?,
        Commands::Check { asset } => commands::check::run(&asset, &config)?,
    }

    Ok(())
}
