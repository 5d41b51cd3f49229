//! Attest Report
//!
//! The only component with no external call: scoring and rendering are
//! pure functions over the verification and task lists, fully
//! deterministic given the same inputs. That purity is deliberate - it
//! makes this crate the primary target for exhaustive unit testing.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod render;
mod score;

pub use config::ReportConfig;
pub use render::generate_report;
pub use score::{compliance_score, VerdictCounts};
