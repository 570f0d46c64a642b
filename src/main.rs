//! # git-init-repos CLI
//!
//! This is the binary entry point for the `git-init-repos` command-line tool.
//!
//! Its primary responsibilities are:
//! - Setting up logging (`GIT_INIT_LOG`, `warn` by default).
//! - Parsing command-line arguments using `clap`.
//! - Executing the sync and translating fatal errors into user-friendly
//!   output and exit status 1.
//!
//! The core application logic is defined in the `lib.rs` library crate, ensuring
//! that the binary is a thin wrapper around the reusable library functionality.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use git_init_repos::output::Reporter;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().filter_or("GIT_INIT_LOG", "warn"))
        .format_timestamp(None)
        .init();

    let cli = cli::Cli::parse();
    match cli.execute() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", Reporter::default().error_label(), e);
            ExitCode::FAILURE
        }
    }
}
