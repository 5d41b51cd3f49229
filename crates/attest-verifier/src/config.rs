//! Configuration for the verifier

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for one verification run.
///
/// The numeric defaults were tuned against one model's context window;
/// they are configuration precisely so callers can retune them rather
/// than treat them as universally correct.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// Claims per batch; one selection call and one verification call
    /// per batch
    pub batch_size: usize,

    /// Candidate files the Oracle may select per claim
    pub max_files_per_claim: usize,

    /// Key files used as the whole-batch fallback when selection fails
    pub fallback_key_files: usize,

    /// File-tree entries shown to the selection call
    pub file_tree_limit: usize,

    /// Character budget per evidence file
    pub per_file_chars: usize,

    /// Character budget for the assembled evidence context. The two-level
    /// cap favors breadth (more files, shallower) over depth.
    pub max_context_chars: usize,

    /// Token ceiling for a selection response
    pub selection_max_tokens: u32,

    /// Token ceiling for a verification response
    pub verification_max_tokens: u32,

    /// Per-call timeout (seconds); a timed-out batch degrades like a
    /// parse failure
    pub call_timeout_secs: u64,
}

impl VerifierConfig {
    /// Get the per-call timeout as a Duration
    pub fn call_timeout(&self) -> Duration {
        Duration::from_secs(self.call_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.batch_size == 0 {
            return Err("batch_size must be greater than 0".to_string());
        }
        if self.per_file_chars == 0 {
            return Err("per_file_chars must be greater than 0".to_string());
        }
        if self.max_context_chars < self.per_file_chars {
            return Err("max_context_chars cannot be below per_file_chars".to_string());
        }
        if self.call_timeout_secs == 0 {
            return Err("call_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            batch_size: 15,
            max_files_per_claim: 5,
            fallback_key_files: 5,
            file_tree_limit: 2_000,
            per_file_chars: 6_000,
            max_context_chars: 48_000,
            selection_max_tokens: 2_048,
            verification_max_tokens: 8_192,
            call_timeout_secs: 180,
        }
    }
}
