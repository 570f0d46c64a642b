//! # Git Operations Seam
//!
//! The sync engine never runs `git` directly. It goes through the
//! [`GitOperations`] trait so tests can count and fail clones and pulls
//! without a network or a `git` binary. In the tool itself,
//! [`DefaultGitOperations`] forwards to the subprocess wrappers in
//! [`crate::git`].

use crate::error::Result;
use std::path::Path;

/// Trait for git operations - allows mocking in tests
pub trait GitOperations: Send + Sync {
    /// Create a fresh clone of `url` at `target_dir`.
    fn clone_repo(&self, url: &str, target_dir: &Path) -> Result<()>;

    /// Bring the existing clone at `repo_dir` up to date.
    fn pull(&self, repo_dir: &Path) -> Result<()>;
}

/// The default implementation of `GitOperations`, which uses the system's
/// `git` command to perform real Git operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultGitOperations;

impl GitOperations for DefaultGitOperations {
    fn clone_repo(&self, url: &str, target_dir: &Path) -> Result<()> {
        crate::git::clone(url, target_dir)
    }

    fn pull(&self, repo_dir: &Path) -> Result<()> {
        crate::git::pull(repo_dir)
    }
}
