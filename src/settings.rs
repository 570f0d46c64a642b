//! # Persisted Settings
//!
//! The tool remembers the last source list and target directory it was given
//! in a small per-user file (one value per line). This module owns that file:
//!
//! - **`SettingsStore`**: a load/save abstraction so the reconciliation logic
//!   can be exercised without touching the real home directory.
//! - **`FileSettingsStore`**: the on-disk implementation. The file is always
//!   rewritten wholesale, never appended.
//! - **`reconcile`**: decides, given the arguments of this run, whether the
//!   stored values should be used and whether the file needs rewriting.
//!
//! Settings problems are never fatal. An unreadable file is treated as
//! missing and a failed write is only logged.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::defaults;
use crate::error::{Error, Result};

/// Load/save access to the persisted settings.
pub trait SettingsStore {
    /// Read the stored values, in order.
    fn load(&self) -> Result<Vec<String>>;

    /// Replace the stored values.
    fn save(&self, values: &[String]) -> Result<()>;
}

/// Settings kept in a plain text file.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Result<Vec<String>> {
        let content = fs::read_to_string(&self.path).map_err(|source| Error::SettingsRead {
            path: self.path.clone(),
            source,
        })?;
        Ok(parse_settings(&content))
    }

    fn save(&self, values: &[String]) -> Result<()> {
        fs::write(&self.path, values.join("\n")).map_err(|source| Error::SettingsWrite {
            path: self.path.clone(),
            source,
        })
    }
}

/// Split settings file content into its non-empty, trimmed lines.
pub fn parse_settings(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reconcile the arguments of this run with the stored settings.
///
/// Returns the stored values only when no arguments were supplied and the
/// store could be read. In every other case `None` is returned and the
/// caller uses `supplied` as is. Along the way the store is rewritten when:
///
/// - it cannot be read (with `supplied`, or the defaults if that is empty);
/// - it holds at least as many values as `supplied` and any of them differs.
///
/// At most one write happens per call.
pub fn reconcile(supplied: &[String], store: &dyn SettingsStore) -> Option<Vec<String>> {
    let stored = match store.load() {
        Ok(stored) => stored,
        Err(e) => {
            debug!("No usable saved settings ({}), creating them", e);
            let fresh = if supplied.is_empty() {
                defaults::default_settings()
            } else {
                supplied.to_vec()
            };
            persist(store, &fresh);
            return None;
        }
    };

    if supplied.is_empty() {
        debug!("Using saved settings: {:?}", stored);
        return Some(stored);
    }

    if stored.len() < supplied.len() {
        return None;
    }

    let changed = supplied
        .iter()
        .zip(&stored)
        .any(|(arg, saved)| arg != saved);
    if changed {
        debug!("Saving new settings: {:?}", supplied);
        persist(store, supplied);
    }

    None
}

fn persist(store: &dyn SettingsStore, values: &[String]) {
    if let Err(e) = store.save(values) {
        warn!("{}", e);
    }
}
