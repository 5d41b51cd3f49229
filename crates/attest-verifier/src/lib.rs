//! Attest Verifier
//!
//! The evidence-selection and verification stage: a two-phase, batched
//! state machine that checks each claim against the codebase and produces
//! exactly one [`ClaimVerification`](attest_domain::ClaimVerification) per
//! submitted claim, no matter how the Oracle misbehaves.
//!
//! # Batching
//!
//! Claims are partitioned into fixed-size batches. Submitting the whole
//! claim set in one call would overflow the context window and degrade
//! judgment quality; batching bounds both. Each batch walks
//! `SelectingFiles -> ReadingFiles -> Verifying -> Done`, with a
//! degraded-N/A exit from any phase.
//!
//! # Failure isolation
//!
//! A batch whose response fails to parse (or times out) degrades to N/A
//! verdicts for that batch only; the run continues. A claim the Oracle
//! ignores inside an otherwise valid response gets an N/A with its
//! reasoning recorded. Only transport-level Oracle failures abort the run.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod batch;
mod cancel;
mod config;
mod context;
mod error;
mod parser;
mod prompt;
mod verifier;

pub use cancel::CancelFlag;
pub use config::VerifierConfig;
pub use error::VerifierError;
pub use verifier::{VerificationOutcome, Verifier};
