//! # Error Handling
//!
//! This module defines the error types for `git-init-repos`. It uses the
//! `thiserror` library for two enums with different propagation rules:
//!
//! - **`Error`**: failures of the tool itself or of a single external
//!   operation (reading the source list, creating the target directory,
//!   running `git`, touching the settings file). Startup failures escape to
//!   the process exit; settings failures are absorbed by the settings store.
//!
//! - **`SyncError`**: the reason one repository could not be synced. These
//!   are recorded per repository in the sync report and never abort sibling
//!   repositories or the run.
//!
//! - **`Result<T>`**: a type alias for `std::result::Result<T, Error>`.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for git-init-repos operations
#[derive(Error, Debug)]
pub enum Error {
    /// The source list file could not be read.
    #[error("file {} doesn't exist", path.display())]
    SourceListNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The current user's home directory could not be determined.
    #[error("could not determine the current user's home directory")]
    HomeDirUnavailable,

    /// The target directory did not exist and could not be created.
    #[error("could not create directory {}: {source}", path.display())]
    CreateTargetDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file could not be read or decoded.
    #[error("could not read settings from {}: {source}", path.display())]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file could not be written.
    #[error("could not write settings to {}: {source}", path.display())]
    SettingsWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `git clone` could not be started or exited unsuccessfully.
    #[error("Git clone error for {url}: {message}")]
    GitClone { url: String, message: String },

    /// `git pull` could not be started or exited unsuccessfully.
    #[error("Git pull error in {}: {message}", path.display())]
    GitPull { path: PathBuf, message: String },

    /// The worker pool for the repository fan-out could not be built.
    #[error("could not start sync workers: {message}")]
    ThreadPool { message: String },
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a single repository was not synced.
#[derive(Error, Debug)]
pub enum SyncError {
    /// No directory name could be derived from the URL.
    #[error("cannot derive a repository name from {url}")]
    EmptyName { url: String },

    /// The derived name is not usable as a directory name.
    #[error("repository name {name:?} derived from {url} is not a valid directory name")]
    InvalidName { url: String, name: String },

    /// Another source earlier in the list already resolves to the same
    /// directory.
    #[error("{url} resolves to {name}, which is already used by {first}")]
    DuplicateTarget {
        url: String,
        name: String,
        first: String,
    },

    /// The clone or pull itself failed.
    #[error(transparent)]
    Git(#[from] Error),
}
