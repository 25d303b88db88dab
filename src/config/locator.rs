//! Fallback lookup for per-instance token files.
//!
//! When no tier supplies a token, the resolver asks a [`TokenFileLocator`]
//! for a token file belonging to the active instance section.

use std::env;

use camino::{Utf8Path, Utf8PathBuf};

use super::fs;

/// Resolves the default token-file path for an instance section.
#[cfg_attr(test, mockall::automock)]
pub trait TokenFileLocator: Send + Sync {
    /// Returns the token file for `section`, or `None` when there is none.
    fn token_file_for(&self, section: &str) -> Option<Utf8PathBuf>;
}

const TOKEN_FILE_EXTENSION: &str = "token";

/// Looks for `<base>/<section>.token` and returns it when the file exists.
///
/// The default base directory is `$HOME/.local/share/buildconf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceTokenFileLocator {
    base_dir: Option<Utf8PathBuf>,
}

impl InstanceTokenFileLocator {
    /// Uses `$HOME/.local/share/buildconf` as the base directory.
    ///
    /// When `HOME` is unset or not UTF-8 the locator never returns a path.
    #[must_use]
    pub fn from_env() -> Self {
        let base_dir = env::var("HOME")
            .ok()
            .filter(|home| !home.is_empty())
            .map(|home| Utf8PathBuf::from(home).join(".local/share/buildconf"));
        Self { base_dir }
    }

    /// Uses `base_dir` as the directory holding instance token files.
    #[must_use]
    pub fn with_base_dir(base_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    /// Returns the directory searched for token files.
    #[must_use]
    pub fn base_dir(&self) -> Option<&Utf8Path> {
        self.base_dir.as_deref()
    }

    /// Returns the token-file path for `section` whether or not it exists.
    #[must_use]
    pub fn candidate_for(&self, section: &str) -> Option<Utf8PathBuf> {
        self.base_dir
            .as_ref()
            .map(|base| base.join(format!("{section}.{TOKEN_FILE_EXTENSION}")))
    }
}

impl Default for InstanceTokenFileLocator {
    fn default() -> Self {
        Self::from_env()
    }
}

impl TokenFileLocator for InstanceTokenFileLocator {
    fn token_file_for(&self, section: &str) -> Option<Utf8PathBuf> {
        let candidate = self.candidate_for(section)?;
        if fs::is_file(&candidate) {
            Some(candidate)
        } else {
            tracing::trace!(path = %candidate, "no instance token file");
            None
        }
    }
}

/// Locator that never supplies a token file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoTokenFileLocator;

impl TokenFileLocator for NoTokenFileLocator {
    fn token_file_for(&self, _section: &str) -> Option<Utf8PathBuf> {
        None
    }
}
