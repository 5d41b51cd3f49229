//! Capped, failure-tolerant file reads

use std::path::Path;
use tracing::warn;

/// Marker appended whenever content is cut at a character budget.
pub const TRUNCATION_MARKER: &str = "\n... [truncated]";

/// Truncate `content` to at most `max_chars` characters, appending the
/// truncation marker when anything was cut. Operates on characters, not
/// bytes, so multi-byte content never splits mid-codepoint.
pub fn truncate_chars(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((byte_offset, _)) => {
            let mut truncated = content[..byte_offset].to_string();
            truncated.push_str(TRUNCATION_MARKER);
            truncated
        }
        None => content.to_string(),
    }
}

/// Read a file relative to the codebase root, capped at `max_chars`.
///
/// Returns `None` on any failure - missing file, permission error,
/// non-UTF-8 content. Evidence files may legitimately vanish or move
/// between indexing and verification, so absence is data, not an error.
pub fn read_file_content(root: &Path, rel_path: &str, max_chars: usize) -> Option<String> {
    let full_path = root.join(rel_path);
    match std::fs::read_to_string(&full_path) {
        Ok(content) => Some(truncate_chars(&content, max_chars)),
        Err(e) => {
            warn!("failed to read {}: {}", full_path.display(), e);
            None
        }
    }
}

/// Read a set of files and assemble them into one evidence-context
/// string, with a per-file cap and a global cap applied in that order.
///
/// The two-level cap favors breadth over depth: many shallow files locate
/// evidence better than one deep file. Paths are read in the order given;
/// unreadable files are silently absent. The result never exceeds
/// `max_context_chars` plus the truncation marker.
pub fn assemble_file_context(
    root: &Path,
    paths: &[String],
    per_file_chars: usize,
    max_context_chars: usize,
) -> String {
    let mut context = String::new();
    for path in paths {
        let Some(content) = read_file_content(root, path, per_file_chars) else {
            continue;
        };
        context.push_str(&format!("=== {} ===\n{}\n\n", path, content));
    }
    truncate_chars(&context, max_context_chars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_truncate_under_budget_unchanged() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("exact", 5), "exact");
    }

    #[test]
    fn test_truncate_over_budget_appends_marker() {
        let result = truncate_chars("abcdefgh", 4);
        assert_eq!(result, format!("abcd{}", TRUNCATION_MARKER));
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let content = "日本語のテキスト";
        let result = truncate_chars(content, 3);
        assert_eq!(result, format!("日本語{}", TRUNCATION_MARKER));
    }

    #[test]
    fn test_read_existing_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "hello").unwrap();

        let content = read_file_content(dir.path(), "a.txt", 100).unwrap();
        assert_eq!(content, "hello");
    }

    #[test]
    fn test_read_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        assert!(read_file_content(dir.path(), "gone.rs", 100).is_none());
    }

    #[test]
    fn test_read_applies_budget() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("big.txt"), "x".repeat(50)).unwrap();

        let content = read_file_content(dir.path(), "big.txt", 10).unwrap();
        assert!(content.starts_with("xxxxxxxxxx"));
        assert!(content.ends_with(TRUNCATION_MARKER));
        assert_eq!(content.chars().count(), 10 + TRUNCATION_MARKER.chars().count());
    }
}
