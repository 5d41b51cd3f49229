//! Error types for remediation

use attest_domain::OracleError;
use thiserror::Error;

/// Errors that abort a remediation run.
///
/// As in verification, parse failures and timeouts degrade the affected
/// batch (it simply yields no tasks) rather than appearing here.
#[derive(Error, Debug)]
pub enum RemediatorError {
    /// Oracle call failed at the transport level; fail-fast, no retry
    #[error("oracle error: {0}")]
    Oracle(#[from] OracleError),

    /// Configuration rejected by validation
    #[error("configuration error: {0}")]
    Config(String),
}
