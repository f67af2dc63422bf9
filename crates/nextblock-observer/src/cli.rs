//! Command-line arguments.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{Args, Parser};
use nextblock_types::Height;

use crate::config::OutputFormat;

/// Observe the moon, sun and tide at a block height.
#[derive(Debug, Parser)]
#[command(name = "nextblock-observer", version, about)]
#[command(after_help = "EXAMPLES:
  nextblock-observer --height 901152
  nextblock-observer --date 2025-01-01 --format json
  nextblock-observer --block block.json")]
pub struct Cli {
    /// Configuration file [default: nextblock-config.yaml if present]
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report format; overrides the configuration file
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// What to observe.
    #[command(flatten)]
    pub target: TargetArgs,
}

/// Exactly one observation target.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct TargetArgs {
    /// Block height (integer, may be negative)
    #[arg(long = "height", value_name = "N", allow_negative_numbers = true)]
    pub height: Option<Height>,

    /// Calendar date; the height is estimated at midnight UTC
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// JSON block record, as returned by a block explorer
    #[arg(long = "block", value_name = "FILE")]
    pub block: Option<PathBuf>,
}

/// A resolved observation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// An explicit block height.
    Height(Height),
    /// The start of a calendar day.
    Date(DateTime<Utc>),
    /// A block record on disk.
    Block(PathBuf),
}

impl TargetArgs {
    /// Collapse the argument group into a single target.
    ///
    /// The group guarantees one field is set. With none, the target is an
    /// empty block path, which fails to load as a block file.
    pub fn into_target(self) -> Target {
        match (self.height, self.date, self.block) {
            (Some(height), _, _) => Target::Height(height),
            (None, Some(date), _) => Target::Date(date.and_time(NaiveTime::default()).and_utc()),
            (None, None, block) => Target::Block(block.unwrap_or_default()),
        }
    }
}
