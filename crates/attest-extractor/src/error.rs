//! Error types for claim extraction

use attest_domain::OracleError;
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Oracle call failed at the transport level
    #[error("oracle error: {0}")]
    Oracle(#[from] OracleError),

    /// Oracle output unrepairable as JSON; fatal, no partial list
    #[error("extraction parse error: {0}")]
    Parse(String),

    /// Oracle call exceeded the configured timeout
    #[error("extraction timed out")]
    Timeout,

    /// Configuration rejected by validation
    #[error("configuration error: {0}")]
    Config(String),
}
