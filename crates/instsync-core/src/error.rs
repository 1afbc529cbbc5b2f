//! Error types for instsync-core

/// Result type for instsync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in instsync-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A user-supplied file list names fewer than the required files
    #[error("Provide at least {min} comma-separated filenames for synchronization (got {count}).")]
    TooFewFiles { count: usize, min: usize },

    /// A user-supplied file list names the same file twice
    #[error("Filename listed more than once: {name}")]
    DuplicateFile { name: String },

    /// Filesystem error from instsync-fs
    #[error(transparent)]
    Fs(#[from] instsync_fs::Error),
}

impl Error {
    /// Whether this error stems from invalid caller input rather than I/O.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::TooFewFiles { .. } | Self::DuplicateFile { .. })
    }
}
