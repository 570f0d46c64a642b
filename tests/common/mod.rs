//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures and helper functions to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_source_list(&[]);
//!     fixture.command().arg("repos.list").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::should_skip_git_tests;
    pub use super::TestFixture;
}

/// File name of the source list written by [`TestFixture::with_source_list`].
pub const SOURCE_LIST: &str = "repos.list";

/// Check if tests that need a working `git` should be skipped.
///
/// Returns `true` if the `SKIP_GIT_TESTS` environment variable is set or no
/// `git` executable can be run.
#[allow(dead_code)]
pub fn should_skip_git_tests() -> bool {
    if env::var("SKIP_GIT_TESTS").is_ok() {
        return true;
    }
    !Command::new("git")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|status| status.success())
}

/// A temporary working directory with its own fake home directory.
///
/// Commands created by the fixture run inside the working directory with
/// `HOME` pointing at the fake home, so the settings file never touches the
/// real one.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty working and home directory.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        temp_dir
            .child("home")
            .create_dir_all()
            .expect("Failed to create home directory");
        temp_dir
            .child("work")
            .create_dir_all()
            .expect("Failed to create work directory");
        Self { temp_dir }
    }

    /// The working directory commands run in.
    pub fn path(&self) -> PathBuf {
        self.temp_dir.path().join("work")
    }

    /// The fake home directory.
    pub fn home(&self) -> PathBuf {
        self.temp_dir.path().join("home")
    }

    /// Where the tool keeps its settings for this fixture.
    pub fn settings_path(&self) -> PathBuf {
        self.home().join(".git_init_settings")
    }

    /// Write the settings file.
    #[allow(dead_code)]
    pub fn with_settings(self, content: &str) -> Self {
        std::fs::write(self.settings_path(), content).expect("Failed to write settings");
        self
    }

    /// Add a file relative to the working directory.
    #[allow(dead_code)]
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child("work")
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Write `repos.list` in the working directory with one URL per line.
    #[allow(dead_code)]
    pub fn with_source_list(self, urls: &[&str]) -> Self {
        let content = urls.join("\n");
        self.with_file(SOURCE_LIST, &content)
    }

    /// Read the settings file, if it exists.
    #[allow(dead_code)]
    pub fn settings(&self) -> Option<String> {
        std::fs::read_to_string(self.settings_path()).ok()
    }

    /// Create a local repository with one commit that can be cloned by path.
    ///
    /// Returns the URL to put in the source list. The directory is named
    /// `<name>.git`, so the tool derives `<name>` from it.
    #[allow(dead_code)]
    pub fn create_origin(&self, name: &str) -> String {
        let origin = self.temp_dir.path().join("origins").join(format!("{name}.git"));
        std::fs::create_dir_all(&origin).expect("Failed to create origin directory");

        git(&origin, &["-c", "init.defaultBranch=main", "init", "--quiet"]);
        std::fs::write(origin.join("README.md"), format!("# {name}\n"))
            .expect("Failed to write README");
        git(&origin, &["add", "README.md"]);
        git(
            &origin,
            &[
                "-c",
                "user.name=Test",
                "-c",
                "user.email=test@example.com",
                "-c",
                "commit.gpgsign=false",
                "commit",
                "--quiet",
                "-m",
                "initial commit",
            ],
        );

        origin.to_str().expect("Non UTF-8 temp path").to_string()
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("git-init-repos");
        cmd.current_dir(self.path())
            .env("HOME", self.home())
            .env("USERPROFILE", self.home())
            .env("NO_COLOR", "1")
            .env_remove("GIT_INIT_SETTINGS")
            .env_remove("GIT_INIT_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .status()
        .expect("Failed to run git");
    assert!(status.success(), "git {:?} failed in {}", args, dir.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_directories() {
        let fixture = TestFixture::new();
        assert!(fixture.path().is_dir());
        assert!(fixture.home().is_dir());
        assert!(fixture.settings().is_none());
    }

    #[test]
    fn test_fixture_with_source_list() {
        let fixture = TestFixture::new().with_source_list(&["a", "b"]);
        let content = std::fs::read_to_string(fixture.path().join(SOURCE_LIST)).unwrap();
        assert_eq!(content, "a\nb");
    }
}
