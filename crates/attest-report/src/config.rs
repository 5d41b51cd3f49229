//! Configuration for report rendering

use serde::{Deserialize, Serialize};

/// Configuration for report rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Evidence snippets are truncated to this many characters in the
    /// per-section detail
    pub snippet_chars: usize,
}

impl ReportConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.snippet_chars == 0 {
            return Err("snippet_chars must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { snippet_chars: 200 }
    }
}
