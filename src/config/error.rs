//! Error types surfaced while loading and resolving configuration.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised by the configuration resolver.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configured value is present but malformed.
    #[error("validation error: {message}")]
    Validation {
        /// Description of the rejected value.
        message: String,
    },

    /// The configuration file is not valid INI.
    #[error("failed to parse config file '{path}': {message}")]
    Parse {
        /// Path of the offending file.
        path: Utf8PathBuf,
        /// Parser diagnostic.
        message: String,
    },

    /// Reading the configuration file or a token file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Builds a [`ConfigError::Validation`] from any displayable message.
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Returns true for [`ConfigError::Validation`].
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
