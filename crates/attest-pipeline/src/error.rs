//! Error type for a whole audit run

use attest_extractor::ExtractorError;
use attest_indexer::IndexerError;
use attest_remediator::RemediatorError;
use attest_verifier::VerifierError;
use thiserror::Error;

/// Errors that abort an audit run.
///
/// Only two stages can fail fatally on their own terms: indexing (bad
/// root) and extraction (unparsable response). Verification and
/// remediation surface here only on transport-level Oracle failures;
/// their parse failures degrade in place and the run continues.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Indexing failed at the entry point
    #[error("indexing failed: {0}")]
    Index(#[from] IndexerError),

    /// Extraction failed; no claims were produced
    #[error("extraction failed: {0}")]
    Extract(#[from] ExtractorError),

    /// Verification aborted on a transport-level Oracle failure
    #[error("verification failed: {0}")]
    Verify(#[from] VerifierError),

    /// Remediation aborted on a transport-level Oracle failure
    #[error("remediation failed: {0}")]
    Remediate(#[from] RemediatorError),

    /// Configuration rejected by validation
    #[error("configuration error: {0}")]
    Config(String),
}
