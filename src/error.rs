// src/error.rs
use thiserror::Error;

/// Ingestion-boundary errors. The parser layer itself is total: malformed
/// rows degrade to absent/default fields instead of raising anything, so the
/// only failures that surface are transport and export I/O.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Network/transport failure or a non-success HTTP status.
    #[error("feed unreachable: {0}")]
    Unreachable(String),

    /// Export/local-file I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
