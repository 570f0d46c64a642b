//! # Error Suggestions
//!
//! This module provides helper functions for generating helpful error
//! messages with hints and suggestions. Following CLI recommendations,
//! errors should tell users what went wrong AND how to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use git_init_repos::suggestions;
//!
//! // Instead of:
//! anyhow::bail!("file {} doesn't exist", path);
//!
//! // Use:
//! return Err(suggestions::source_list_not_found(path));
//! ```

use crate::error::Error;

/// Generate an error for when the source list file is missing.
///
/// Includes hints about:
/// - The expected file format
/// - Passing a different source list
pub fn source_list_not_found(path: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "file {path} doesn't exist\n\n\
         hint: Create it with one repository URL per line\n\
         hint: Pass a different file as the first argument: git-init-repos <SOURCE_LIST> [TARGET_DIR]"
    )
}

/// Generate an error for when the home directory cannot be determined.
pub fn home_dir_unavailable() -> anyhow::Error {
    anyhow::anyhow!(
        "{}\n\n\
         hint: Set the HOME environment variable (USERPROFILE on Windows)",
        Error::HomeDirUnavailable
    )
}

/// Wrap a fatal sync error, adding a hint where one is known.
pub fn sync_failed(error: Error) -> anyhow::Error {
    if matches!(error, Error::CreateTargetDir { .. }) {
        anyhow::anyhow!(
            "{error}\n\n\
             hint: Check that the parent directory exists and is writable\n\
             hint: Pass a different directory as the second argument"
        )
    } else {
        anyhow::Error::new(error)
    }
}
