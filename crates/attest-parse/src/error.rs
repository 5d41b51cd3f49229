//! Error types for tolerant parsing

use thiserror::Error;

/// Errors from the lenient JSON utilities
#[derive(Error, Debug)]
pub enum ParseError {
    /// Input could not be parsed as a JSON array even after repair
    #[error("unrepairable JSON: {0}")]
    Unrepairable(String),

    /// Input parsed but was neither an array nor an object
    #[error("expected JSON array, got {0}")]
    NotAnArray(String),
}
