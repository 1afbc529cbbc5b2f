//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use instsync_core::{DEFAULT_FILES, HeaderMap, parse_file_list};

use crate::error::Result;

/// Synchronize AGENTS.md, CLAUDE.md, and GEMINI.md based on the newest file.
///
/// Exit status: 0 already in sync, 1 files updated, 2 missing files
/// created, 3 no files found.
#[derive(Parser, Debug)]
#[command(name = "sync-ai-coding-instructions")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the markdown files (defaults to current working directory)
    #[arg(long, env = "SYNC_AI_PATH", value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Comma-separated list of markdown filenames to synchronize (minimum two)
    #[arg(long, env = "SYNC_AI_FILES", value_name = "FILES", default_value_t = default_files())]
    pub files: String,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Also print the result as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

fn default_files() -> String {
    DEFAULT_FILES.join(",")
}

impl Cli {
    /// Directory to synchronize; the working directory unless `--path` is given.
    pub fn directory(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }

    /// Header mapping for the requested files.
    ///
    /// # Errors
    ///
    /// Fails with a usage error when fewer than two distinct names are given.
    pub fn headers(&self) -> Result<HeaderMap> {
        let files = parse_file_list(&self.files)?;
        Ok(HeaderMap::from_names(files))
    }
}
