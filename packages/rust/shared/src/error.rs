//! Error types for Leadbase.
//!
//! Library crates use [`LeadbaseError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all Leadbase operations.
#[derive(Debug, thiserror::Error)]
pub enum LeadbaseError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Unsupported or undecodable input document. Reported to the caller
    /// without touching the store.
    #[error("input error: {message}")]
    Input { message: String },

    /// Contact-enrichment gateway error. Always caught inside the gateway
    /// and degraded to the synthetic address; surfaced only in logs.
    #[error("enrichment error: {0}")]
    Enrichment(String),

    /// Export/bundle error, including the empty-store "no data" case.
    #[error("export error: {0}")]
    Export(String),

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, LeadbaseError>;

impl LeadbaseError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create an input error from any displayable message.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
