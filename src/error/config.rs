//! Configuration error module.
//!
//! Errors raised while loading, validating or writing configuration files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Error when the configuration file is missing.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// Error when refusing to overwrite an existing configuration file.
    #[error("Configuration file already exists: {0} (pass --force to overwrite)")]
    AlreadyExists(PathBuf),

    /// Error when the file extension maps to no supported format.
    #[error("Unsupported configuration format for: {0}")]
    UnsupportedFormat(PathBuf),

    /// Error when parsing the configuration sources.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Error when a section fails validation.
    #[error("Invalid value for {key}: {message}")]
    ValidationError {
        /// Dotted path of the offending setting
        key: String,
        /// What is wrong with it
        message: String,
    },

    /// Error when serializing a configuration for output.
    #[error("Failed to serialize configuration: {0}")]
    SerializeError(String),
}

impl ConfigError {
    /// Shorthand for a [`ConfigError::ValidationError`].
    pub fn invalid<K: Into<String>, M: Into<String>>(key: K, message: M) -> Self {
        Self::ValidationError {
            key: key.into(),
            message: message.into(),
        }
    }
}
