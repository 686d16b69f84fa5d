//! # Mapdice - A Map Picker
//!
//! Toggle the maps you don't want, press the dice, and let it land on one.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run with images from ./images
//! cargo run
//!
//! # Run with a specific config file
//! cargo run -- --config path/to/config.toml
//! ```

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mapdice_core::{Config, CoreError};
use mapdice_ui::{run, Flags};

/// Mapdice - pick the next map at random
#[derive(Parser, Debug)]
#[command(name = "mapdice")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_config(path: Option<&PathBuf>) -> Result<Config, CoreError> {
    match path {
        Some(path) => Ok(Config::load_from(path)?),
        None => Ok(Config::load()),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    tracing::info!("Starting Mapdice v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(args.config.as_ref())?;

    run(Flags { config }).map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
