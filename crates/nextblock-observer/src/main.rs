//! Command-line observer for the nextblock observatory.
//!
//! Resolves a block from a height, a calendar date or an explorer JSON
//! record, points a [`Telescope`] at it, and prints the lunar, solar and
//! tidal readings.
//!
//! # Startup Sequence
//!
//! 1. Parse command-line arguments
//! 2. Load configuration from `nextblock-config.yaml` (or `--config`)
//! 3. Initialize structured logging (tracing) on stderr
//! 4. Resolve the target block
//! 5. Observe and print the report on stdout

mod cli;
mod config;
mod error;
mod report;

use std::io::Write as _;
use std::path::{Path, PathBuf};

use clap::Parser;
use nextblock_core::{Delta, Telescope};
use nextblock_types::Block;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Target};
use crate::config::{LoggingConfig, ObserverConfig};
use crate::error::ObserverError;

/// Configuration file read when `--config` is not given.
const DEFAULT_CONFIG_PATH: &str = "nextblock-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, block loading, or rendering fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.output.format = format;
    }

    init_tracing(&config.logging);
    info!(
        format = ?config.output.format,
        include_tidal = config.output.include_tidal,
        "Configuration loaded"
    );

    let block = resolve_block(cli.target.into_target())?;
    let observations = Telescope::new(&block).observe()?;
    info!(
        height = observations.height.value(),
        formatted_date = %observations.formatted_date,
        "Block observed"
    );

    let report = report::render(
        &observations,
        config.output.format,
        config.output.include_tidal,
    )?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", report.trim_end()).map_err(ObserverError::from)?;
    Ok(())
}

/// Initialize the tracing subscriber on stderr so stdout carries only the
/// report. `RUST_LOG` takes precedence over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Load configuration from an explicit path, or from
/// `nextblock-config.yaml` if it exists. Falls back to defaults.
fn load_config(path: Option<&Path>) -> Result<ObserverConfig, ObserverError> {
    if let Some(path) = path {
        return Ok(ObserverConfig::from_file(path)?);
    }
    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    if default_path.exists() {
        Ok(ObserverConfig::from_file(default_path)?)
    } else {
        Ok(ObserverConfig::from_env()?)
    }
}

/// Turn a command-line target into a block record.
fn resolve_block(target: Target) -> Result<Block, ObserverError> {
    match target {
        Target::Height(height) => Ok(Block::at_height(height)),
        Target::Date(date) => {
            let height = Delta::height_from_date(date);
            debug!(%date, height = height.value(), "Estimated height from date");
            Ok(Block::at_height(height))
        }
        Target::Block(path) => load_block(path),
    }
}

/// Read a JSON block record from disk.
fn load_block(path: PathBuf) -> Result<Block, ObserverError> {
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(source) => return Err(ObserverError::BlockFile { path, source }),
    };
    let block: Block = serde_json::from_str(&contents)
        .map_err(|source| ObserverError::BlockRecord { path: path.clone(), source })?;
    debug!(
        path = %path.display(),
        height = block.height.value(),
        "Loaded block record"
    );
    Ok(block)
}
