//! Configuration for the remediator

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for one remediation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemediatorConfig {
    /// Verifications per batch within each verdict group
    pub batch_size: usize,

    /// Character budget per re-read evidence file
    pub per_file_chars: usize,

    /// Character budget for the assembled evidence context
    pub max_context_chars: usize,

    /// Token ceiling for a remediation response
    pub max_tokens: u32,

    /// Per-call timeout (seconds); a timed-out batch yields no tasks
    pub call_timeout_secs: u64,
}

impl RemediatorConfig {
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

impl Default for RemediatorConfig {
    fn default() -> Self {
        Self {
            batch_size: 15,
            per_file_chars: 6_000,
            max_context_chars: 48_000,
            max_tokens: 8_192,
            call_timeout_secs: 180,
        }
    }
}
