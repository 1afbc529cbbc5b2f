//! Text I/O and metadata lookups for target files

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;
use std::time::SystemTime;

use fs2::FileExt;

use crate::{Error, Result};

/// Write content into a file in place, creating it if needed.
///
/// The existing file is opened and overwritten rather than replaced, so a
/// symlinked target updates the file it points at, and the inode, hard
/// links and permission bits are kept. An exclusive advisory lock is held
/// while the file is truncated and rewritten.
pub fn write_in_place(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(|e| Error::io(path, e))?;

    file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    let written = file
        .set_len(0)
        .and_then(|()| file.write_all(content))
        .and_then(|()| file.sync_all())
        .map_err(|e| Error::io(path, e));

    let _ = FileExt::unlock(&file);
    written
}

/// Read UTF-8 text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write UTF-8 text content to a file in place.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_in_place(path, content.as_bytes())
}

/// Last-modified time of `path`, or `None` when nothing exists there.
///
/// Symlinks are followed; a dangling link counts as missing.
pub fn modified_time(path: &Path) -> Result<Option<SystemTime>> {
    match fs::metadata(path) {
        Ok(meta) => meta.modified().map(Some).map_err(|e| Error::io(path, e)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(path, e)),
    }
}
