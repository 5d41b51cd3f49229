//! Evidence context assembly
//!
//! The union of all files selected for a batch is read once, each file
//! capped at a per-file budget, and the assembled context capped again at
//! a larger global budget. Two levels so that many shallow files beat one
//! deep file: breadth locates evidence, depth rarely does.

use crate::config::VerifierConfig;
use attest_indexer::assemble_file_context;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use tracing::debug;

/// Read the deduplicated union of selected files and assemble the
/// evidence context for one batch.
///
/// `selections` maps claim ids to candidate paths; the union is read in
/// sorted order so the context is deterministic regardless of map
/// iteration order. Unreadable files are silently absent.
pub fn assemble_context(
    root: &Path,
    selections: &HashMap<String, Vec<String>>,
    config: &VerifierConfig,
) -> String {
    let unique_files: Vec<String> = selections
        .values()
        .flatten()
        .collect::<BTreeSet<&String>>()
        .into_iter()
        .cloned()
        .collect();

    debug!("reading {} unique selected file(s)", unique_files.len());
    assemble_file_context(
        root,
        &unique_files,
        config.per_file_chars,
        config.max_context_chars,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_indexer::TRUNCATION_MARKER;
    use std::fs;
    use tempfile::TempDir;

    fn config() -> VerifierConfig {
        VerifierConfig::default()
    }

    fn selections(entries: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
        entries
            .iter()
            .map(|(id, files)| {
                (
                    id.to_string(),
                    files.iter().map(|f| f.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_files_read_once_despite_multiple_claims() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("shared.rs"), "fn shared() {}").unwrap();

        let sel = selections(&[("claim-1", &["shared.rs"]), ("claim-2", &["shared.rs"])]);
        let context = assemble_context(dir.path(), &sel, &config());

        assert_eq!(context.matches("=== shared.rs ===").count(), 1);
    }

    #[test]
    fn test_missing_files_absent_not_fatal() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("real.rs"), "fn real() {}").unwrap();

        let sel = selections(&[("claim-1", &["real.rs", "vanished.rs"])]);
        let context = assemble_context(dir.path(), &sel, &config());

        assert!(context.contains("real.rs"));
        assert!(!context.contains("vanished.rs"));
    }

    #[test]
    fn test_per_file_cap_applied() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("big.rs"), "x".repeat(100)).unwrap();

        let cfg = VerifierConfig {
            per_file_chars: 10,
            ..Default::default()
        };
        let sel = selections(&[("claim-1", &["big.rs"])]);
        let context = assemble_context(dir.path(), &sel, &cfg);

        assert!(context.contains(TRUNCATION_MARKER));
        assert!(!context.contains(&"x".repeat(11)));
    }

    #[test]
    fn test_global_cap_bounds_context_length() {
        let dir = TempDir::new().unwrap();
        for i in 0..10 {
            fs::write(dir.path().join(format!("f{}.rs", i)), "y".repeat(500)).unwrap();
        }

        let cfg = VerifierConfig {
            per_file_chars: 600,
            max_context_chars: 1_000,
            ..Default::default()
        };
        let files: Vec<String> = (0..10).map(|i| format!("f{}.rs", i)).collect();
        let sel: HashMap<String, Vec<String>> =
            [("claim-1".to_string(), files)].into_iter().collect();
        let context = assemble_context(dir.path(), &sel, &cfg);

        assert!(context.chars().count() <= 1_000 + TRUNCATION_MARKER.chars().count());
        assert!(context.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_deterministic_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.rs"), "A").unwrap();
        fs::write(dir.path().join("b.rs"), "B").unwrap();

        let sel = selections(&[("claim-1", &["b.rs"]), ("claim-2", &["a.rs"])]);
        let context = assemble_context(dir.path(), &sel, &config());

        let a_pos = context.find("=== a.rs ===").unwrap();
        let b_pos = context.find("=== b.rs ===").unwrap();
        assert!(a_pos < b_pos);
    }
}
