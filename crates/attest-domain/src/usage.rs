//! Token usage accounting
//!
//! Usage is a plain value threaded through and returned from each stage,
//! never shared mutable state. Under the sequential model this needs no
//! synchronization, and a future parallel runner can merge stage values
//! without changing any signatures.

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Accumulated Oracle token counts for one stage or one whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleUsage {
    /// Number of Oracle calls made
    pub calls: u64,

    /// Input tokens consumed across those calls
    pub input_tokens: u64,

    /// Output tokens produced across those calls
    pub output_tokens: u64,
}

impl OracleUsage {
    /// Record one call's token counts, returning the updated value.
    pub fn record(self, input_tokens: u64, output_tokens: u64) -> Self {
        Self {
            calls: self.calls + 1,
            input_tokens: self.input_tokens + input_tokens,
            output_tokens: self.output_tokens + output_tokens,
        }
    }

    /// Total tokens in both directions.
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens + self.output_tokens
    }
}

impl Add for OracleUsage {
    type Output = OracleUsage;

    fn add(self, other: OracleUsage) -> OracleUsage {
        OracleUsage {
            calls: self.calls + other.calls,
            input_tokens: self.input_tokens + other.input_tokens,
            output_tokens: self.output_tokens + other.output_tokens,
        }
    }
}
