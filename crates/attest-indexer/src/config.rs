//! Configuration for the indexer

use serde::{Deserialize, Serialize};

/// Configuration for one indexing pass.
///
/// The defaults are tuned for a mid-size model context window; they are
/// exposed here rather than hardcoded so callers can retune them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexerConfig {
    /// Maximum files retained in the tree; the walk stops silently at
    /// this cap
    pub max_files: usize,

    /// Character budget for a single file read before truncation
    pub read_file_chars: usize,
}

impl IndexerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_files == 0 {
            return Err("max_files must be greater than 0".to_string());
        }
        if self.read_file_chars == 0 {
            return Err("read_file_chars must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            max_files: 2_000,
            read_file_chars: 6_000,
        }
    }
}
