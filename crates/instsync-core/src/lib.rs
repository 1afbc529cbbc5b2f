//! Core sync engine for AI coding assistant instruction files
//!
//! Keeps a set of markdown files (by default `AGENTS.md`, `CLAUDE.md` and
//! `GEMINI.md`) sharing one body. The most recently modified file is the
//! source of truth; every other file receives its body under its own
//! header line.
//!
//! # Example
//!
//! ```rust,no_run
//! use instsync_core::{HeaderMap, SyncStatus, sync_markdown};
//!
//! let headers = HeaderMap::default();
//! let result = sync_markdown(".", &headers).unwrap();
//! if result.status() == SyncStatus::NothingFound {
//!     eprintln!("{}", result.message().unwrap_or_default());
//! }
//! ```

pub mod content;
pub mod engine;
pub mod error;
pub mod headers;
pub mod result;

pub use content::{compose_content, extract_body};
pub use engine::{SyncEngine, SyncOptions, TargetFile, sync_markdown};
pub use error::{Error, Result};
pub use headers::{DEFAULT_FILES, HeaderMap, MIN_FILES, header_for, parse_file_list};
pub use result::{SyncResult, SyncStatus};
