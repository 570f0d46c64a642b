//! # Repository Sync Engine
//!
//! Brings every repository in the source list up to date under the target
//! directory: repositories without a local copy are cloned, the rest are
//! pulled.
//!
//! ## Execution Flow
//!
//! 1.  **Target directory**: created (recursively) when missing, unless it is
//!     the current directory.
//! 2.  **Planning**: each URL is mapped to a directory name and path, in
//!     source-list order. Unusable names, and names already claimed by an
//!     earlier URL in the list, fail that repository up front so no two
//!     workers ever write to the same directory.
//! 3.  **Fan-out**: every planned repository runs on its own worker in a
//!     rayon pool sized to the list, and the engine waits for all of them.
//!     A repository is cloned when its directory is absent and pulled when
//!     it exists; a fresh clone is never pulled in the same run.
//! 4.  **Suggestion**: a `cd` hint for the target directory is printed.
//!
//! Per-repository failures are recorded in the returned [`SyncReport`] and
//! never stop the other repositories or the run. Only a target directory
//! that cannot be created or a pool that cannot be started fails `run`.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use rayon::prelude::*;

use crate::config::EffectiveConfig;
use crate::error::{Error, Result, SyncError};
use crate::output::Reporter;
use crate::path::{self, PathNormalizer, CURRENT_DIR};
use crate::repository::{DefaultGitOperations, GitOperations};

/// What happened to a repository that synced successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    Cloned,
    Pulled,
}

/// The result for one line of the source list.
#[derive(Debug)]
pub struct RepoOutcome {
    pub url: String,
    pub name: String,
    pub result: std::result::Result<SyncAction, SyncError>,
}

impl RepoOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a whole run, in source-list order.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub outcomes: Vec<RepoOutcome>,
}

impl SyncReport {
    pub fn cloned(&self) -> usize {
        self.count(SyncAction::Cloned)
    }

    pub fn pulled(&self) -> usize {
        self.count(SyncAction::Pulled)
    }

    pub fn failed(&self) -> usize {
        self.failures().count()
    }

    /// Outcomes whose repository could not be synced.
    pub fn failures(&self) -> impl Iterator<Item = &RepoOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.is_success())
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(RepoOutcome::is_success)
    }

    fn count(&self, action: SyncAction) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome.result, Ok(a) if a == action))
            .count()
    }
}

/// A repository after planning: where it goes, or why it cannot be synced.
struct SyncTask {
    url: String,
    name: String,
    target: std::result::Result<PathBuf, SyncError>,
}

/// Clones or pulls every repository of a source list.
pub struct SyncEngine {
    git_ops: Box<dyn GitOperations>,
    paths: PathNormalizer,
    reporter: Reporter,
}

impl SyncEngine {
    /// Creates an engine that runs the system `git`.
    pub fn new(paths: PathNormalizer, reporter: Reporter) -> Self {
        Self::with_operations(Box::new(DefaultGitOperations), paths, reporter)
    }

    /// Creates an engine with a custom `GitOperations` implementation.
    pub fn with_operations(
        git_ops: Box<dyn GitOperations>,
        paths: PathNormalizer,
        reporter: Reporter,
    ) -> Self {
        Self {
            git_ops,
            paths,
            reporter,
        }
    }

    /// Sync every URL in `sources` into `config.target_dir`.
    pub fn run(&self, sources: &[String], config: &EffectiveConfig) -> Result<SyncReport> {
        let target_dir = self.paths.to_absolute(&config.target_dir);
        let display = self.paths.to_display(&config.target_dir);

        self.ensure_target_dir(&config.target_dir, &target_dir, &display)?;

        let tasks = self.plan(sources, &target_dir);
        let outcomes: Vec<RepoOutcome> = if tasks.is_empty() {
            Vec::new()
        } else {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(tasks.len())
                .thread_name(|idx| format!("sync-{}", idx))
                .build()
                .map_err(|e| Error::ThreadPool {
                    message: e.to_string(),
                })?;

            pool.install(|| {
                tasks
                    .into_par_iter()
                    .map(|task| self.sync_task(task, &display))
                    .collect()
            })
        };

        if config.target_dir != CURRENT_DIR {
            self.reporter.suggest_cd(&display);
        }

        Ok(SyncReport { outcomes })
    }

    fn ensure_target_dir(&self, raw: &str, target_dir: &str, display: &str) -> Result<()> {
        if raw == CURRENT_DIR || Path::new(target_dir).exists() {
            return Ok(());
        }

        self.reporter.creating_dir(display);
        fs::create_dir_all(target_dir).map_err(|source| Error::CreateTargetDir {
            path: PathBuf::from(target_dir),
            source,
        })
    }

    /// Resolve names and target paths. The first URL to claim a name keeps
    /// it; later URLs with the same name are failed.
    fn plan(&self, sources: &[String], target_dir: &str) -> Vec<SyncTask> {
        let mut claimed: HashMap<&str, &str> = HashMap::new();

        sources
            .iter()
            .map(|url| {
                let name = path::repo_name(url);
                let target = path::validate_repo_name(url, name).and_then(|()| {
                    match claimed.entry(name) {
                        Entry::Occupied(first) => Err(SyncError::DuplicateTarget {
                            url: url.clone(),
                            name: name.to_string(),
                            first: first.get().to_string(),
                        }),
                        Entry::Vacant(slot) => {
                            slot.insert(url.as_str());
                            Ok(PathBuf::from(self.paths.join(target_dir, name)))
                        }
                    }
                });

                SyncTask {
                    url: url.clone(),
                    name: name.to_string(),
                    target,
                }
            })
            .collect()
    }

    fn sync_task(&self, task: SyncTask, display: &str) -> RepoOutcome {
        let SyncTask { url, name, target } = task;

        let result =
            target.and_then(|repo_dir| self.clone_or_pull(&url, &name, &repo_dir, display));

        if let Err(e) = &result {
            debug!("Skipped {}: {}", url, e);
        }

        RepoOutcome { url, name, result }
    }

    fn clone_or_pull(
        &self,
        url: &str,
        name: &str,
        repo_dir: &Path,
        display: &str,
    ) -> std::result::Result<SyncAction, SyncError> {
        if repo_dir.exists() {
            self.reporter.updating(name, display);
            self.git_ops.pull(repo_dir)?;
            Ok(SyncAction::Pulled)
        } else {
            self.reporter.cloning(name, display);
            self.git_ops.clone_repo(url, repo_dir)?;
            Ok(SyncAction::Cloned)
        }
    }
}
