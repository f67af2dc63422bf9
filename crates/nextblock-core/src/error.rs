//! Error types for the `nextblock-core` crate.
//!
//! All fallible operations in this crate return [`ObservationError`].

use core::fmt;

use nextblock_types::InvalidHeight;

/// Errors that can occur while constructing derivers or rendering readings.
#[derive(Debug, thiserror::Error)]
pub enum ObservationError {
    /// The supplied block height was missing or not an integer.
    #[error(transparent)]
    InvalidHeight(#[from] InvalidHeight),

    /// Building a display string failed.
    #[error("failed to render {what}: {source}")]
    Render {
        /// What was being rendered.
        what: &'static str,
        /// The underlying formatter error.
        source: fmt::Error,
    },
}
