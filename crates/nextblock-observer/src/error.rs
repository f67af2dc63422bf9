//! Error types for the observer binary.
//!
//! [`ObserverError`] is the top-level error type that `main` propagates
//! with `?`.

use std::path::PathBuf;

/// Top-level error for the observer binary.
#[derive(Debug, thiserror::Error)]
pub enum ObserverError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: crate::config::ConfigError,
    },

    /// Reading a block file failed.
    #[error("failed to read block file {}: {source}", .path.display())]
    BlockFile {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A block file did not hold a valid block record.
    #[error("invalid block record in {}: {source}", .path.display())]
    BlockRecord {
        /// The file that held the record.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Deriving the observations failed.
    #[error("observation error: {source}")]
    Observation {
        /// The underlying observation error.
        #[from]
        source: nextblock_core::ObservationError,
    },

    /// Rendering the report failed.
    #[error("report error: {message}")]
    Report {
        /// Description of the rendering failure.
        message: String,
    },

    /// Writing the report to stdout failed.
    #[error("failed to write report: {source}")]
    Output {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
