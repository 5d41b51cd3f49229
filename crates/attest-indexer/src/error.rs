//! Error types for indexing

use thiserror::Error;

/// Errors that can occur at the indexing entry point.
///
/// Indexing is one of the two fatal points in the pipeline; everything
/// downstream of it degrades instead of failing.
#[derive(Error, Debug)]
pub enum IndexerError {
    /// Root path does not exist or is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// Configuration rejected by validation
    #[error("configuration error: {0}")]
    Config(String),
}
