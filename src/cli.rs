//! CLI argument parsing and command dispatch

use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser};

use crate::commands;

/// Usage text shown for `-h`.
pub const USAGE: &str = "\
Reads git repository URLs from a file.
For each URL a git clone is performed.
If a clone already exists, a git pull is performed instead.
Provided arguments are saved in the ~/.git_init_settings file.

Usage:
  git-init-repos [SOURCE_LIST] [TARGET_DIR]

  Expects 0 - 2 arguments.
  The first argument is the file to read repository URLs from.
  The second argument is the directory to clone repositories into.

  No arguments:
    If a ~/.git_init_settings file exists, the saved settings are used,
    otherwise the file to read repository URLs from is './my.list'
    and the directory to clone repositories into is the current directory.
";

/// Clone or update every repository listed in a file
#[derive(Parser, Debug)]
#[command(name = "git-init-repos")]
#[command(about, long_about = None, disable_help_flag = true)]
pub struct Cli {
    /// File listing one repository URL per line
    #[arg(value_name = "SOURCE_LIST")]
    source_list: Option<String>,

    /// Directory to clone repositories into
    #[arg(value_name = "TARGET_DIR")]
    target_dir: Option<String>,

    /// Print usage and exit
    #[arg(short, long, action = ArgAction::SetTrue)]
    help: bool,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<ExitCode> {
        if self.help {
            print!("{}", USAGE);
            return Ok(ExitCode::FAILURE);
        }

        commands::sync::execute(self.positional_args())?;
        Ok(ExitCode::SUCCESS)
    }

    /// The positional arguments in order, as saved to the settings file.
    fn positional_args(&self) -> Vec<String> {
        self.source_list
            .iter()
            .chain(self.target_dir.iter())
            .cloned()
            .collect()
    }
}
