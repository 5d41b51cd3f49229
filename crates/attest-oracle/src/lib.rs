//! Attest Oracle Layer
//!
//! Implementations of the [`Oracle`](attest_domain::Oracle) trait from
//! `attest-domain`. The pipeline treats the Oracle as an unreliable
//! collaborator: these implementations only move bytes and classify
//! failures; all tolerance for malformed *content* lives downstream in
//! `attest-parse`.
//!
//! # Providers
//!
//! - [`MockOracle`]: deterministic scripted responses for testing
//! - [`AnthropicOracle`]: hosted Messages-API provider over HTTP
//!
//! # Examples
//!
//! ```
//! use attest_oracle::MockOracle;
//! use attest_domain::Oracle;
//!
//! # tokio_test::block_on(async {
//! let oracle = MockOracle::new("[]");
//! let response = oracle.call("system", "user", 1024).await.unwrap();
//! assert_eq!(response.text, "[]");
//! # });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod anthropic;
mod mock;

pub use anthropic::AnthropicOracle;
pub use mock::{MockOracle, RecordedCall};
