//! # git-init-repos Library
//!
//! This library keeps a directory of git clones in step with a list of
//! repository URLs. It is designed to be used by the `git-init-repos`
//! command-line tool, which is a thin wrapper around it.
//!
//! ## Quick Example
//!
//! ```
//! use git_init_repos::path::{repo_name, PathNormalizer, PathStyle};
//!
//! assert_eq!(repo_name("https://github.com/user/tools.git"), "tools");
//!
//! let paths = PathNormalizer::new("/home/alice", PathStyle::Posix);
//! assert_eq!(paths.to_absolute("~/code"), "/home/alice/code");
//! assert_eq!(paths.to_display("/home/alice/code"), "~/code");
//! ```
//!
//! ## Core Concepts
//!
//! - **Paths (`path`)**: deriving a directory name from a URL, expanding and
//!   shortening `~`, and the platform separator.
//! - **Settings (`settings`)**: the per-user file remembering the last source
//!   list and target directory.
//! - **Configuration (`config`)**: combining arguments, saved settings and
//!   defaults into one [`config::EffectiveConfig`], and reading the source
//!   list.
//! - **Sync (`sync`)**: cloning missing repositories and pulling existing
//!   ones, all concurrently, with failures contained per repository.
//! - **Git (`git`, `repository`)**: the `git` subprocess calls and the
//!   trait that lets tests replace them.
//!
//! ## Execution Flow
//!
//! 1.  **Resolve**: [`config::resolve`] reconciles arguments with the saved
//!     settings.
//! 2.  **Read**: [`config::read_source_list`] loads the URLs.
//! 3.  **Sync**: [`sync::SyncEngine::run`] clones or pulls every URL and
//!     returns a [`sync::SyncReport`].

pub mod config;
pub mod defaults;
pub mod error;
pub mod git;
pub mod output;
pub mod path;
pub mod repository;
pub mod settings;
pub mod suggestions;
pub mod sync;

#[cfg(test)]
mod path_proptest;
