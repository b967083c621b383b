//! Typed errors for the coverage pipeline.
//!
//! Per-file problems are recovered where they occur (skip and log);
//! these variants are what crosses module boundaries, so callers and
//! tests can match on the kind of failure rather than message text.

use std::path::PathBuf;
use thiserror::Error;

/// Failure kinds surfaced by the pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// Coverage report discovery failures
    #[error("Discovery error: {0}")]
    Discovery(String),

    /// Summary file parsing failures
    #[error("Parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Ownership or application attribution failures
    #[error("Attribution error: {0}")]
    Attribution(String),

    /// Telemetry channel failures
    #[error("Export error: {0}")]
    Export(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a parse error with the offending file's path.
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
