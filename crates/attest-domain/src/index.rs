//! Codebase index records produced by the indexer

use serde::{Deserialize, Serialize};

/// A file flagged as likely relevant to compliance claims, with the
/// heuristic that flagged it spelled out for the report reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyFile {
    /// Path relative to the codebase root
    pub path: String,

    /// Human-readable reason the file was tagged
    pub reason: String,
}

/// Bounded snapshot of a codebase produced by one indexing pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodebaseIndex {
    /// Absolute root path that was walked
    pub root_path: String,

    /// Number of files retained in the tree (post-truncation)
    pub total_files: usize,

    /// Relative paths, in deterministic walk order
    pub file_tree: Vec<String>,

    /// Heuristically tagged key files
    pub key_files: Vec<KeyFile>,

    /// One-line description of the codebase for prompt context
    pub summary: String,
}

impl CodebaseIndex {
    /// Paths of the first `n` key files, the selection fallback set.
    pub fn fallback_files(&self, n: usize) -> Vec<String> {
        self.key_files.iter().take(n).map(|k| k.path.clone()).collect()
    }
}
