//! Trait definitions for external interactions
//!
//! These traits define the boundary between pipeline logic and
//! infrastructure. Implementations live in other crates (attest-oracle).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the external text-generation service.
///
/// The distinction matters to callers even though the pipeline currently
/// retries neither kind: a `Transient` failure could be retried by a
/// future policy, a `Permanent` one never should be.
#[derive(Error, Debug)]
pub enum OracleError {
    /// Rate limit or server-side failure; potentially retriable
    #[error("transient oracle error: {0}")]
    Transient(String),

    /// Bad credentials or malformed request; retrying cannot help
    #[error("permanent oracle error: {0}")]
    Permanent(String),
}

/// One completed Oracle round-trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleResponse {
    /// Raw response text, typically JSON-shaped but untrusted
    pub text: String,

    /// Input tokens consumed by the call
    pub input_tokens: u64,

    /// Output tokens produced by the call
    pub output_tokens: u64,
}

/// The external text-generation service the pipeline delegates semantic
/// judgment to. Verdicts are its opinions; the pipeline's job is to stay
/// robust around it.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Issue one completion call.
    async fn call(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> Result<OracleResponse, OracleError>;
}
