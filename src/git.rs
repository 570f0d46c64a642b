use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use log::debug;

use crate::error::{Error, Result};

/// Clone `url` into `target_dir`.
///
/// This uses the system git command, which automatically handles:
/// - SSH keys from ~/.ssh/
/// - Git credential helpers
/// - Personal access tokens
/// - Any authentication configured in ~/.gitconfig
///
/// Git's own diagnostics go straight to our stderr.
pub fn clone(url: &str, target_dir: &Path) -> Result<()> {
    debug!("git clone {} {}", url, target_dir.display());

    let status = git_command()
        .args(["clone", "--quiet", url])
        .arg(target_dir)
        .status()
        .map_err(|e| Error::GitClone {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    if !status.success() {
        return Err(Error::GitClone {
            url: url.to_string(),
            message: exit_message(status),
        });
    }

    Ok(())
}

/// Pull the current branch of the clone at `repo_dir`.
///
/// Runs `git -C <repo_dir> pull`; the process working directory is left
/// alone.
pub fn pull(repo_dir: &Path) -> Result<()> {
    debug!("git -C {} pull", repo_dir.display());

    let status = git_command()
        .arg("-C")
        .arg(repo_dir)
        .args(["pull", "--quiet"])
        .status()
        .map_err(|e| Error::GitPull {
            path: repo_dir.to_path_buf(),
            message: e.to_string(),
        })?;

    if !status.success() {
        return Err(Error::GitPull {
            path: repo_dir.to_path_buf(),
            message: exit_message(status),
        });
    }

    Ok(())
}

fn git_command() -> Command {
    let mut command = Command::new("git");
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::inherit());
    command
}

fn exit_message(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("git exited with status {}", code),
        None => "git was terminated by a signal".to_string(),
    }
}
