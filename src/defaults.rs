//! Default values and environment lookups for git-init-repos.
//!
//! This module provides centralized default values used across the tool,
//! ensuring consistency and avoiding duplication.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Source list used when neither arguments nor saved settings name one.
pub const DEFAULT_SOURCE_LIST: &str = "./my.list";

/// Target directory used when neither arguments nor saved settings name one.
pub const DEFAULT_TARGET_DIR: &str = ".";

/// File name of the per-user settings file inside the home directory.
pub const SETTINGS_FILE_NAME: &str = ".git_init_settings";

/// Environment variable that overrides the settings file location.
pub const SETTINGS_PATH_ENV: &str = "GIT_INIT_SETTINGS";

/// Returns the current user's home directory.
///
/// Uses the platform-appropriate lookup from `dirs` (`$HOME` on Unix, the
/// user profile folder on Windows).
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or(Error::HomeDirUnavailable)
}

/// Returns the settings file path for a user whose home is `home`.
///
/// `GIT_INIT_SETTINGS` takes precedence when set to a non-empty value.
pub fn settings_path(home: &Path) -> PathBuf {
    match env::var_os(SETTINGS_PATH_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => home.join(SETTINGS_FILE_NAME),
    }
}

/// The settings written when there is nothing else to save.
pub fn default_settings() -> Vec<String> {
    vec![
        DEFAULT_SOURCE_LIST.to_string(),
        DEFAULT_TARGET_DIR.to_string(),
    ]
}
