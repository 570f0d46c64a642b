//! # Output
//!
//! This module holds everything the tool prints for the user: the
//! per-repository progress lines, the directory-creation notice, the closing
//! `cd` suggestion, and styled error labels.
//!
//! ## Respecting User Preferences
//!
//! Colour is decided once from the environment:
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! Lines are written whole with `println!`, so lines from concurrently
//! syncing repositories never interleave mid-line.

use std::env;

use console::style;

/// Output configuration for controlling colors.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from the environment.
    ///
    /// Colors are disabled if:
    /// - `NO_COLOR` environment variable is set (any value, including empty)
    /// - `CLICOLOR=0` is set
    /// - `TERM=dumb` is set
    /// - stdout is not a TTY (unless `CLICOLOR_FORCE=1`)
    pub fn from_env() -> Self {
        Self {
            use_color: Self::detect_color_support(),
        }
    }

    /// Detect whether color output is supported based on environment.
    fn detect_color_support() -> bool {
        // The presence of the variable (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Create a configuration with colors always enabled.
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Writes the user-facing lines of a sync run.
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    config: OutputConfig,
}

impl Reporter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn creating_dir(&self, display: &str) {
        println!("{}", creating_dir_line(display));
    }

    pub fn cloning(&self, name: &str, display: &str) {
        println!("{}", cloning_line(name, display));
    }

    pub fn updating(&self, name: &str, display: &str) {
        println!("{}", updating_line(name, display));
    }

    /// Suggest moving into the target directory once the run is over.
    pub fn suggest_cd(&self, display: &str) {
        println!("\n{}\n", self.cd_line(display));
    }

    /// Label for fatal error messages.
    pub fn error_label(&self) -> String {
        if self.config.use_color {
            style("Error:").red().force_styling(true).to_string()
        } else {
            "Error:".to_string()
        }
    }

    fn cd_line(&self, display: &str) -> String {
        let line = format!("  cd {}", display);
        if self.config.use_color {
            style(line).cyan().force_styling(true).to_string()
        } else {
            line
        }
    }
}

fn creating_dir_line(display: &str) -> String {
    format!("Creating a new directory at {}...", display)
}

fn cloning_line(name: &str, display: &str) -> String {
    format!("Cloning {} into {}...", name, display)
}

fn updating_line(name: &str, display: &str) -> String {
    format!("Updating {} in {}...", name, display)
}
