//! Path and repository-name utilities for git-init-repos
//!
//! Everything that depends on the platform's path conventions lives here, so
//! the configuration and sync code never branch on the OS family themselves.

use crate::error::SyncError;

/// Marker for the user's home directory at the start of a path.
pub const HOME_MARKER: char = '~';

/// The current-directory target, which is never created and never displayed
/// literally.
pub const CURRENT_DIR: &str = ".";

/// How [`CURRENT_DIR`] is shown to the user.
pub const CURRENT_DIR_LABEL: &str = "current directory";

/// Derive the local directory name for a repository URL.
///
/// Returns the text between the last `/` and the last `.` that follows it,
/// so `https://github.com/user/repo.git` becomes `repo`. When there is no
/// `.` after the last `/`, the whole remainder is returned
/// (`https://host/user/repo` becomes `repo`). No validation is done here;
/// see [`validate_repo_name`].
pub fn repo_name(url: &str) -> &str {
    let start = url.rfind('/').map_or(0, |idx| idx + 1);
    let tail = &url[start..];
    match tail.rfind('.') {
        Some(end) => &tail[..end],
        None => tail,
    }
}

/// Reject names that cannot be used as a directory directly under the
/// target directory.
pub fn validate_repo_name(url: &str, name: &str) -> Result<(), SyncError> {
    if name.is_empty() {
        return Err(SyncError::EmptyName {
            url: url.to_string(),
        });
    }

    if name == "." || name == ".." || name.contains(['\\', ':']) {
        return Err(SyncError::InvalidName {
            url: url.to_string(),
            name: name.to_string(),
        });
    }

    Ok(())
}

/// Path separator conventions, picked once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    Posix,
    Windows,
}

impl PathStyle {
    /// The style of the platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(windows) {
            PathStyle::Windows
        } else {
            PathStyle::Posix
        }
    }

    /// Separator used when joining paths.
    pub fn separator(self) -> char {
        match self {
            PathStyle::Posix => '/',
            PathStyle::Windows => '\\',
        }
    }

    /// Whether `c` separates path components in this style.
    ///
    /// Windows accepts both slashes.
    pub fn is_separator(self, c: char) -> bool {
        match self {
            PathStyle::Posix => c == '/',
            PathStyle::Windows => c == '/' || c == '\\',
        }
    }
}

/// Converts user-supplied paths to the form used on disk and back to the
/// form shown in log lines.
#[derive(Debug, Clone)]
pub struct PathNormalizer {
    home: String,
    style: PathStyle,
}

impl PathNormalizer {
    /// Create a normalizer for `home`. Trailing separators are dropped so
    /// `/home/user/` and `/home/user` behave the same.
    pub fn new(home: impl Into<String>, style: PathStyle) -> Self {
        let home = home.into();
        let home = home.trim_end_matches(|c: char| style.is_separator(c)).to_string();
        Self { home, style }
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn style(&self) -> PathStyle {
        self.style
    }

    /// Expand a leading `~` into the home directory.
    ///
    /// `~` and `~/rest` are expanded; every other path, including `.` and
    /// relative paths, is returned unchanged and resolves against the
    /// process working directory.
    pub fn to_absolute(&self, path: &str) -> String {
        match path.strip_prefix(HOME_MARKER) {
            Some("") => self.home.clone(),
            Some(rest) if rest.starts_with(|c: char| self.style.is_separator(c)) => {
                format!("{}{}", self.home, rest)
            }
            _ => path.to_string(),
        }
    }

    /// Render `path` for the user: `.` becomes "current directory" and a
    /// path inside the home directory is shortened to `~/...`.
    pub fn to_display(&self, path: &str) -> String {
        if path == CURRENT_DIR {
            return CURRENT_DIR_LABEL.to_string();
        }

        match path.strip_prefix(self.home.as_str()) {
            Some(rest) if rest.is_empty() => HOME_MARKER.to_string(),
            Some(rest) if rest.starts_with(|c: char| self.style.is_separator(c)) => {
                format!("{}{}", HOME_MARKER, rest)
            }
            _ => path.to_string(),
        }
    }

    /// Append `name` to `dir` with this style's separator.
    pub fn join(&self, dir: &str, name: &str) -> String {
        if dir.ends_with(|c: char| self.style.is_separator(c)) {
            format!("{}{}", dir, name)
        } else {
            format!("{}{}{}", dir, self.style.separator(), name)
        }
    }
}
