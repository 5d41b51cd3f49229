//! Attest Indexer
//!
//! Walks a codebase root into a bounded [`CodebaseIndex`]: a truncated
//! file tree plus a heuristically tagged key-files list. The bound exists
//! to keep context-window exposure predictable on huge repositories, so
//! hitting the file cap is silent truncation, not an error.
//!
//! File reads are expected to fail: evidence files may vanish or move
//! between indexing and verification, so [`read_file_content`] returns
//! `Option` and never errors.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod error;
mod indexer;
mod key_files;
mod reader;

pub use attest_domain::{CodebaseIndex, KeyFile};
pub use config::IndexerConfig;
pub use error::IndexerError;
pub use indexer::index_codebase;
pub use key_files::key_file_reason;
pub use reader::{assemble_file_context, read_file_content, truncate_chars, TRUNCATION_MARKER};
