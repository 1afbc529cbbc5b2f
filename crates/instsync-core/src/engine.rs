//! SyncEngine implementation
//!
//! The SyncEngine decides which target file is authoritative and brings the
//! others in line with it.
//!
//! One run is a single pass:
//! - stat every target and split them into existing and missing
//! - pick the newest existing file (ties go to the earliest entry in the
//!   [`HeaderMap`]) and take its body
//! - write `<own header>\n<body>` to every target whose content differs
//!
//! There is no rollback: if a write fails half way, earlier targets stay
//! rewritten and the error is returned.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use instsync_fs::{io, resolve_dir};
use tracing::{debug, info};

use crate::Result;
use crate::content::{compose_content, extract_body};
use crate::headers::HeaderMap;
use crate::result::SyncResult;

/// Options for sync operations
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// If true, run the full decision procedure but skip every write.
    /// The returned result is the one a real run would produce.
    pub dry_run: bool,
}

/// One file the engine keeps synchronized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFile {
    /// Logical file name, as configured in the [`HeaderMap`]
    pub name: String,
    /// Required first line of the file
    pub header: String,
    /// Absolute location on disk
    pub path: PathBuf,
}

/// Observed state of a target at the start of a run.
struct FileState<'a> {
    target: &'a TargetFile,
    modified: Option<SystemTime>,
}

impl FileState<'_> {
    fn exists(&self) -> bool {
        self.modified.is_some()
    }
}

/// Engine for synchronizing instruction files within one directory
pub struct SyncEngine {
    /// Absolute directory holding the targets
    root: PathBuf,
    /// Target names and their headers
    headers: HeaderMap,
}

impl SyncEngine {
    /// Create a new SyncEngine
    ///
    /// `dir` is resolved to an absolute path here, before any target is
    /// inspected.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be made absolute.
    pub fn new(dir: impl AsRef<Path>, headers: HeaderMap) -> Result<Self> {
        let root = resolve_dir(dir)?;
        debug!(root = %root.display(), targets = headers.len(), "created sync engine");
        Ok(Self { root, headers })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Target files in [`HeaderMap`] order.
    pub fn targets(&self) -> Vec<TargetFile> {
        self.headers
            .iter()
            .map(|(name, header)| TargetFile {
                name: name.to_string(),
                header: header.to_string(),
                path: self.root.join(name),
            })
            .collect()
    }

    /// Synchronize the targets, writing changes to disk.
    pub fn sync(&self) -> Result<SyncResult> {
        self.sync_with_options(&SyncOptions::default())
    }

    /// Synchronize the targets.
    ///
    /// # Errors
    ///
    /// Any I/O failure (unreadable file, non-UTF-8 content, a directory in
    /// place of a target, failed write) is returned as is.
    pub fn sync_with_options(&self, options: &SyncOptions) -> Result<SyncResult> {
        let targets = self.targets();
        let states = targets
            .iter()
            .map(|target| {
                Ok(FileState {
                    target,
                    modified: io::modified_time(&target.path)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let Some(source) = newest(&states) else {
            info!(root = %self.root.display(), "no target files found");
            return Ok(SyncResult::nothing_found());
        };

        debug!(source = %source.name, "using newest file as source of truth");
        let source_content = io::read_text(&source.path)?;
        let body = extract_body(&source_content);

        let mut changed = false;
        let mut created = Vec::new();
        for state in &states {
            let target = state.target;
            let desired = compose_content(&target.header, body);

            if state.exists() {
                let read;
                let current = if target.name == source.name {
                    source_content.as_str()
                } else {
                    read = io::read_text(&target.path)?;
                    read.as_str()
                };
                if current == desired {
                    debug!(file = %target.name, "already up to date");
                    continue;
                }
                changed = true;
            } else {
                created.push(target.name.as_str());
            }

            self.write(target, &desired, options)?;
        }

        if !created.is_empty() {
            return Ok(SyncResult::created_missing(created));
        }
        if changed {
            return Ok(SyncResult::synchronized());
        }
        Ok(SyncResult::in_sync())
    }

    fn write(&self, target: &TargetFile, content: &str, options: &SyncOptions) -> Result<()> {
        if options.dry_run {
            info!(file = %target.name, "[dry-run] would write");
            return Ok(());
        }
        io::write_text(&target.path, content)?;
        info!(file = %target.name, path = %target.path.display(), "wrote");
        Ok(())
    }
}

/// Newest existing target; the first one wins when timestamps are equal.
fn newest<'a>(states: &[FileState<'a>]) -> Option<&'a TargetFile> {
    let mut best: Option<(&'a TargetFile, SystemTime)> = None;
    for state in states {
        let Some(modified) = state.modified else {
            continue;
        };
        if best.is_none_or(|(_, newest)| modified > newest) {
            best = Some((state.target, modified));
        }
    }
    best.map(|(target, _)| target)
}

/// Synchronize the files named in `headers` inside `dir`.
pub fn sync_markdown(dir: impl AsRef<Path>, headers: &HeaderMap) -> Result<SyncResult> {
    SyncEngine::new(dir, headers.clone())?.sync()
}
