//! Configuration error types

use lexicon_i18n::I18nError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, validating or applying configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read configuration file {}: {source}", path.display())]
    Read {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is malformed
    #[error("Failed to parse configuration file {}: {message}", path.display())]
    Parse {
        /// Path of the configuration file
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// A configuration value is invalid
    #[error("Invalid configuration: {0}")]
    Validation(String),

    /// A configured bundle failed to load
    #[error(transparent)]
    I18n(#[from] I18nError),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
