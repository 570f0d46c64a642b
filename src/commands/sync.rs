//! # Sync Command Implementation
//!
//! This module implements the tool's only command: clone every repository
//! of the source list that is missing under the target directory and pull
//! every one that is already there.
//!
//! ## Startup
//!
//! - **User**: the home directory is resolved first; it anchors `~` paths
//!   and the settings file. Failing to find it ends the run.
//! - **Settings**: the positional arguments are reconciled with
//!   `~/.git_init_settings`, which may be rewritten.
//! - **Source list**: read once; a missing file ends the run.
//!
//! Individual repository failures never change the exit status. They are
//! only visible through git's own messages and the debug log.

use std::path::Path;

use anyhow::Result;
use log::{debug, info};

use git_init_repos::config;
use git_init_repos::defaults;
use git_init_repos::output::{OutputConfig, Reporter};
use git_init_repos::path::{PathNormalizer, PathStyle};
use git_init_repos::settings::FileSettingsStore;
use git_init_repos::suggestions;
use git_init_repos::sync::SyncEngine;

/// Execute the sync with the positional arguments of this run.
pub fn execute(args: Vec<String>) -> Result<()> {
    let home = defaults::home_dir().map_err(|_| suggestions::home_dir_unavailable())?;
    let home_str = home.to_str().ok_or_else(suggestions::home_dir_unavailable)?;
    let paths = PathNormalizer::new(home_str, PathStyle::current());

    let store = FileSettingsStore::new(defaults::settings_path(&home));
    let config = config::resolve(&args, &store);
    debug!(
        "Resolved config: source_list={}, target_dir={} (settings: {})",
        config.source_list,
        config.target_dir,
        store.path().display()
    );

    let source_list = paths.to_absolute(&config.source_list);
    let sources = config::read_source_list(Path::new(&source_list))
        .map_err(|_| suggestions::source_list_not_found(&config.source_list))?;
    debug!("Read {} repositories from {}", sources.len(), source_list);

    let engine = SyncEngine::new(paths, Reporter::new(OutputConfig::default()));
    let report = engine.run(&sources, &config).map_err(suggestions::sync_failed)?;

    info!(
        "Sync finished: {} cloned, {} pulled, {} failed",
        report.cloned(),
        report.pulled(),
        report.failed()
    );

    Ok(())
}
