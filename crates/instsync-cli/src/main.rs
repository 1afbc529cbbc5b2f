//! AI coding instruction sync CLI
//!
//! Keeps AGENTS.md, CLAUDE.md, GEMINI.md (or any chosen set) sharing the
//! body of whichever was edited last. The process exit status is the sync
//! outcome code.

mod cli;
mod error;
mod logging;
mod sync;

use clap::Parser;
use colored::Colorize;

use cli::Cli;
use error::EXIT_USAGE;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version are reported through clap errors too
            std::process::exit(if e.use_stderr() { EXIT_USAGE } else { 0 });
        }
    };

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialize logging: {}", "warning".yellow().bold(), e);
    }

    match sync::run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            if e.is_usage() {
                eprintln!("Run {} for usage.", "sync-ai-coding-instructions --help".cyan());
            }
            std::process::exit(e.exit_code());
        }
    }
}
