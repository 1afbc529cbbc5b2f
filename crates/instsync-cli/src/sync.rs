//! The sync command
//!
//! Runs the engine once and reports its result: the message goes to stderr,
//! the code becomes the exit status.

use std::io::Write;

use instsync_core::{SyncEngine, SyncOptions, SyncResult, SyncStatus};
use serde::Serialize;

use crate::cli::Cli;
use crate::error::Result;

/// Machine-readable form of a [`SyncResult`] for `--json`.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    code: i32,
    status: SyncStatus,
    message: Option<&'a str>,
    dry_run: bool,
}

/// Run the sync command and return the exit code to use.
///
/// The file list is validated before the engine is created, so a usage
/// error never touches the filesystem.
pub fn run(cli: &Cli) -> Result<i32> {
    let headers = cli.headers()?;
    let directory = cli.directory()?;

    let engine = SyncEngine::new(&directory, headers)?;
    tracing::debug!(root = %engine.root().display(), dry_run = cli.dry_run, "running sync");
    let result = engine.sync_with_options(&SyncOptions {
        dry_run: cli.dry_run,
    })?;

    report(
        &result,
        cli.json,
        cli.dry_run,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )?;
    Ok(result.code())
}

/// Print the message (if any) to `err`; with `json` set, also print a JSON
/// report to `out`.
fn report(
    result: &SyncResult,
    json: bool,
    dry_run: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    if let Some(message) = result.message().filter(|m| !m.is_empty()) {
        writeln!(err, "{message}")?;
    }

    if json {
        let report = JsonReport {
            code: result.code(),
            status: result.status(),
            message: result.message(),
            dry_run,
        };
        writeln!(out, "{}", serde_json::to_string(&report)?)?;
    }

    Ok(())
}
