//! Outcome of a sync run

use serde::{Deserialize, Serialize};

/// Message reported when none of the target files exist.
pub const NOTHING_FOUND_MESSAGE: &str = "No markdown files found; nothing to synchronize.";

/// Message reported when existing files were brought in line.
pub const SYNCHRONIZED_MESSAGE: &str = "Synchronized markdown files to match the latest changes.";

/// Terminal outcome of a sync run.
///
/// Each variant maps to the process exit code the CLI reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    /// All targets existed and already matched
    InSync,
    /// All targets existed and at least one was rewritten
    Synchronized,
    /// Some targets were missing and have been created
    CreatedMissing,
    /// No target existed; nothing was written
    NothingFound,
}

impl SyncStatus {
    pub fn code(self) -> i32 {
        match self {
            Self::InSync => 0,
            Self::Synchronized => 1,
            Self::CreatedMissing => 2,
            Self::NothingFound => 3,
        }
    }
}

/// Status code plus optional human-readable message.
///
/// This is a value, not an error: every terminal outcome of the decision
/// procedure is reported through it, and presentation is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncResult {
    status: SyncStatus,
    message: Option<String>,
}

impl SyncResult {
    pub fn in_sync() -> Self {
        Self {
            status: SyncStatus::InSync,
            message: None,
        }
    }

    pub fn synchronized() -> Self {
        Self {
            status: SyncStatus::Synchronized,
            message: Some(SYNCHRONIZED_MESSAGE.to_string()),
        }
    }

    /// Report created files; names are sorted before being listed.
    pub fn created_missing<I, S>(created: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = created.into_iter().map(Into::into).collect();
        names.sort();
        Self {
            status: SyncStatus::CreatedMissing,
            message: Some(format!("Created missing file(s): {}.", names.join(", "))),
        }
    }

    pub fn nothing_found() -> Self {
        Self {
            status: SyncStatus::NothingFound,
            message: Some(NOTHING_FOUND_MESSAGE.to_string()),
        }
    }

    pub fn status(&self) -> SyncStatus {
        self.status
    }

    /// Integer status code: 0 in sync, 1 synchronized, 2 created, 3 none found.
    pub fn code(&self) -> i32 {
        self.status.code()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
