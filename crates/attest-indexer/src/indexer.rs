//! Codebase walking

use crate::config::IndexerConfig;
use crate::error::IndexerError;
use crate::key_files::{is_code_file, key_file_reason};
use attest_domain::{CodebaseIndex, KeyFile};
use std::path::Path;
use tracing::{info, warn};
use walkdir::{DirEntry, WalkDir};

/// Directories never worth walking: build output, dependencies, VCS metadata.
const IGNORED_DIRS: &[&str] = &[
    "node_modules",
    "target",
    "dist",
    "build",
    "out",
    "vendor",
    "coverage",
    "__pycache__",
    "venv",
    ".venv",
];

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    // Hidden directories are skipped wholesale; hidden files are kept
    // (dotfiles like .env.example are often exactly what claims cite).
    (name.starts_with('.') && name.len() > 1) || IGNORED_DIRS.contains(&name.as_ref())
}

/// Walk `root` into a bounded [`CodebaseIndex`].
///
/// The walk order is sorted by file name, so the resulting tree is
/// deterministic across runs. Hitting `max_files` stops the walk silently;
/// a truncated tree is still a usable index.
///
/// # Errors
///
/// [`IndexerError::NotADirectory`] when `root` is missing or not a
/// directory - this is one of the pipeline's two fatal entry points.
pub fn index_codebase(root: &Path, config: &IndexerConfig) -> Result<CodebaseIndex, IndexerError> {
    if !root.is_dir() {
        return Err(IndexerError::NotADirectory(root.display().to_string()));
    }

    let mut file_tree = Vec::new();
    let mut key_files = Vec::new();
    let mut code_file_count = 0usize;
    let mut truncated = false;

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if file_tree.len() >= config.max_files {
            truncated = true;
            break;
        }

        let rel_path = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace('\\', "/");

        if is_code_file(&rel_path) {
            code_file_count += 1;
        }
        if let Some(reason) = key_file_reason(&rel_path) {
            key_files.push(KeyFile {
                path: rel_path.clone(),
                reason,
            });
        }
        file_tree.push(rel_path);
    }

    let root_name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());

    let summary = format!(
        "{}: {} files ({} code files, {} key files){}",
        root_name,
        file_tree.len(),
        code_file_count,
        key_files.len(),
        if truncated { ", tree truncated" } else { "" },
    );

    info!("indexed {}", summary);

    Ok(CodebaseIndex {
        root_path: root.display().to_string(),
        total_files: file_tree.len(),
        file_tree,
        key_files,
        summary,
    })
}
