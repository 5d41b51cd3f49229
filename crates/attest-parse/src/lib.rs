//! Attest Parse
//!
//! Shared tolerant-parsing utilities for Oracle output. Every Oracle
//! response in the pipeline is JSON-shaped but untrusted: it may arrive
//! wrapped in markdown fences, truncated mid-array by a token limit, or
//! with individual fields missing or misspelled. This crate centralizes
//! the recovery heuristics so extractor, verifier, and remediator all
//! degrade the same way.
//!
//! The repair functions are pure string transforms with no I/O, which is
//! what makes them independently unit-testable.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod fields;
mod repair;

pub use error::ParseError;
pub use fields::{f64_field_clamped, id_field, str_field, string_list_field, u64_field};
pub use repair::{parse_array_lenient, repair_truncated_array, strip_code_fences};
