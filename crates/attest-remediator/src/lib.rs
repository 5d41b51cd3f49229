//! Attest Remediator
//!
//! Generates prioritized, file-targeted fix tasks for claims that came
//! back FAIL or PARTIAL from verification. The two verdict groups get
//! distinct prompt emphasis: FAIL claims request full implementation
//! guidance, PARTIAL claims request gap-only guidance so the Oracle does
//! not re-describe code that already works.
//!
//! Tasks are globally re-sorted by severity after generation and
//! renumbered from 1, so a task's id encodes its priority, not the order
//! the Oracle happened to emit it in.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod error;
mod parser;
mod prompt;
mod remediator;

pub use config::RemediatorConfig;
pub use error::RemediatorError;
pub use remediator::{RemediationOutcome, Remediator};
