//! Coarse-grained cancellation
//!
//! Checked between batches only. No mid-call cancellation: an in-flight
//! Oracle round-trip always completes or times out on its own.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag requesting that a run stop at the next batch boundary.
///
/// Remaining claims still receive N/A verifications, so cancellation never
/// breaks the one-verdict-per-claim completeness guarantee.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Create a flag in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
