//! Attest Pipeline
//!
//! The top-level orchestrator: wires the indexer, extractor, verifier,
//! remediator, and report renderer into one sequential audit run against
//! a single [`Oracle`](attest_domain::Oracle) implementation.
//!
//! ```no_run
//! use attest_pipeline::{run_audit, AuditSource, CancelFlag, PipelineConfig};
//! use attest_oracle::MockOracle;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! # async fn demo() -> Result<(), attest_pipeline::PipelineError> {
//! let oracle = Arc::new(MockOracle::default());
//! let outcome = run_audit(
//!     AuditSource::Document("The service hashes all passwords.".to_string()),
//!     Path::new("/path/to/repo"),
//!     oracle,
//!     &PipelineConfig::default(),
//!     &CancelFlag::new(),
//! )
//! .await?;
//! println!("{}", outcome.report);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod error;
mod pipeline;

pub use attest_verifier::CancelFlag;
pub use config::PipelineConfig;
pub use error::PipelineError;
pub use pipeline::{run_audit, AuditOutcome, AuditSource};
