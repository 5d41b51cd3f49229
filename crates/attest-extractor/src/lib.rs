//! Attest Extractor
//!
//! Turns a specification document or a codebase summary into a list of
//! typed [`Claim`](attest_domain::Claim) records via one Oracle call plus
//! defensive parsing.
//!
//! # Failure policy
//!
//! Extraction is one of the pipeline's two fatal points: a response that
//! remains unparsable after repair aborts the run with
//! [`ExtractorError::Parse`], and no partial claim list is ever returned.
//! *Within* a parsable response, tolerance is per-field: an unknown
//! category or severity degrades that field to its default, and only a
//! record with no claim text at all is dropped.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod error;
mod extractor;
mod parser;
mod prompt;

pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::{ClaimExtractor, ClaimSource, ExtractionOutcome};
