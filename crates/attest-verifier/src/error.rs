//! Error types for verification

use attest_domain::OracleError;
use thiserror::Error;

/// Errors that abort a verification run.
///
/// Parse failures and timeouts never appear here - those degrade the
/// affected batch to N/A and the run continues.
#[derive(Error, Debug)]
pub enum VerifierError {
    /// Oracle call failed at the transport level; fail-fast, no retry
    #[error("oracle error: {0}")]
    Oracle(#[from] OracleError),

    /// Configuration rejected by validation
    #[error("configuration error: {0}")]
    Config(String),
}
