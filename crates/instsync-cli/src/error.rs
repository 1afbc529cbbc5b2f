//! Error types for instsync-cli

/// Exit status for invalid invocations (`EX_USAGE` from sysexits.h).
pub const EXIT_USAGE: i32 = 64;

/// Exit status for I/O and other runtime failures.
///
/// Kept apart from the sync outcome codes 0 through 3.
pub const EXIT_FAILURE: i32 = 4;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from instsync-core
    #[error(transparent)]
    Core(#[from] instsync_core::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Core(e) if e.is_usage() => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }

    pub fn is_usage(&self) -> bool {
        self.exit_code() == EXIT_USAGE
    }
}
