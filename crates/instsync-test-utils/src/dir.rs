//! [`TestDir`] fixture for sync scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

/// A temporary directory with helpers for writing target files at chosen
/// modification times and asserting on the result.
///
/// # Example
///
/// ```rust,no_run
/// use instsync_test_utils::TestDir;
///
/// let dir = TestDir::new();
/// dir.write_target("AGENTS.md", "# AGENTS.md", "Body line.\n");
/// dir.set_mtime("AGENTS.md", 1_000);
/// dir.assert_file_not_exists("CLAUDE.md");
/// ```
pub struct TestDir {
    temp_dir: TempDir,
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Write raw `content` to `name`.
    pub fn write(&self, name: &str, content: &str) {
        fs::write(self.path(name), content)
            .unwrap_or_else(|e| panic!("Could not write {name}: {e}"));
    }

    /// Write `name` as `<header>\n<body>`.
    pub fn write_target(&self, name: &str, header: &str, body: &str) {
        self.write(name, &format!("{header}\n{body}"));
    }

    /// Set the modification time of `name` to `secs` after the Unix epoch.
    pub fn set_mtime(&self, name: &str, secs: u64) {
        let stamp = SystemTime::UNIX_EPOCH + Duration::from_secs(secs);
        fs::File::options()
            .write(true)
            .open(self.path(name))
            .and_then(|file| file.set_modified(stamp))
            .unwrap_or_else(|e| panic!("Could not set mtime of {name}: {e}"));
    }

    pub fn mtime(&self, name: &str) -> SystemTime {
        fs::metadata(self.path(name))
            .and_then(|meta| meta.modified())
            .unwrap_or_else(|e| panic!("Could not stat {name}: {e}"))
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name))
            .unwrap_or_else(|e| panic!("Could not read {name}: {e}"))
    }

    /// Names of all entries in the directory, sorted.
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.root())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Assert that `name` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, name: &str) {
        let full_path = self.path(name);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `name` does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, name: &str) {
        let full_path = self.path(name);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }
}
