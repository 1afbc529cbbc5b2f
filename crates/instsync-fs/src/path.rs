//! Resolution of the directory holding the target files

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Resolve `dir` to an absolute path before any other filesystem access.
///
/// Existing directories are canonicalized (symlinks resolved, no UNC prefix
/// on Windows). A directory that does not exist is made absolute against the
/// current working directory instead, so callers can still report that no
/// target files were found there. Path bytes are kept as they are.
pub fn resolve_dir(dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = dir.as_ref();
    match dunce::canonicalize(dir) {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            let absolute = std::path::absolute(dir).map_err(|source| Error::Resolve {
                path: dir.to_path_buf(),
                source,
            })?;
            tracing::debug!(path = %absolute.display(), "directory does not exist");
            Ok(absolute)
        }
        Err(source) => Err(Error::Resolve {
            path: dir.to_path_buf(),
            source,
        }),
    }
}
