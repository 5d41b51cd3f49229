//! Attest Domain Layer
//!
//! This crate contains the canonical record types and trait interfaces for
//! the attest claim-verification pipeline. All other crates depend on it;
//! it depends on nothing else in the workspace.
//!
//! ## Key Concepts
//!
//! - **Claim**: an atomic assertion extracted from a document or inferred
//!   from a codebase, with category, severity, and testability
//! - **Verdict**: PASS/PARTIAL/FAIL/N/A outcome of checking a claim
//! - **Evidence**: a cited code location plus snippet supporting a verdict
//! - **RemediationTask**: a prioritized fix for a FAIL/PARTIAL claim
//! - **Oracle**: the external text-generation service the pipeline
//!   delegates semantic judgment to
//!
//! ## Invariants
//!
//! - Claim ids are unique within one extraction
//! - Every claim maps to exactly one [`ClaimVerification`]
//! - Non-testable claims resolve to N/A without any Oracle call
//! - All records are produced once per stage and never mutated

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod claim;
pub mod index;
pub mod remediation;
pub mod traits;
pub mod usage;
pub mod verdict;

// Re-exports for convenience
pub use claim::{Category, Claim, Severity};
pub use index::{CodebaseIndex, KeyFile};
pub use remediation::{EstimatedEffort, RemediationAction, RemediationTask};
pub use traits::{Oracle, OracleError, OracleResponse};
pub use usage::OracleUsage;
pub use verdict::{ClaimVerification, Evidence, Verdict};
