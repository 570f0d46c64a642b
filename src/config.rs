//! # Run Configuration
//!
//! This module turns the raw command-line values into the [`EffectiveConfig`]
//! for one run, and reads the source list that config points at.
//!
//! ## Resolution Order
//!
//! 1. Positional arguments given on this run.
//! 2. Values saved by an earlier run, used only when no arguments are given
//!    (see [`crate::settings::reconcile`]).
//! 3. The defaults: `./my.list` and the current directory.
//!
//! Resolution happens once, before any repository is touched, and the result
//! does not change for the rest of the run.

use std::fs;
use std::path::Path;

use crate::defaults::{DEFAULT_SOURCE_LIST, DEFAULT_TARGET_DIR};
use crate::error::{Error, Result};
use crate::settings::{self, SettingsStore};

/// The source list and target directory governing one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    /// File listing one repository URL per line.
    pub source_list: String,
    /// Directory under which each repository gets its own subdirectory.
    pub target_dir: String,
}

impl EffectiveConfig {
    /// Build a config from positional values, filling gaps with defaults.
    pub fn from_args(args: &[String]) -> Self {
        Self {
            source_list: args
                .first()
                .cloned()
                .unwrap_or_else(|| DEFAULT_SOURCE_LIST.to_string()),
            target_dir: args
                .get(1)
                .cloned()
                .unwrap_or_else(|| DEFAULT_TARGET_DIR.to_string()),
        }
    }
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self::from_args(&[])
    }
}

/// Combine this run's arguments with the saved settings.
///
/// The settings file may be rewritten as a side effect; that happens here,
/// before any repository work starts.
pub fn resolve(supplied: &[String], store: &dyn SettingsStore) -> EffectiveConfig {
    let reconciled = settings::reconcile(supplied, store).filter(|values| !values.is_empty());
    EffectiveConfig::from_args(reconciled.as_deref().unwrap_or(supplied))
}

/// Read the repository URLs listed in `path`.
pub fn read_source_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| Error::SourceListNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_source_list(&content))
}

/// One URL per line; surrounding whitespace is trimmed and blank lines are
/// skipped. Duplicates are kept.
pub fn parse_source_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
