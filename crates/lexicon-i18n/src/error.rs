//! Error types for bundle loading

use crate::source::SourceFormat;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading translation bundles
#[derive(Error, Debug)]
pub enum I18nError {
    /// The source file is missing or unreadable
    #[error("Failed to read translation source {}: {source}", path.display())]
    SourceRead {
        /// Path of the source
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The source is malformed or its top level is not an object
    #[error("Failed to parse {format} translation source {}: {message}", path.display())]
    SourceParse {
        /// Path of the source
        path: PathBuf,
        /// Format the source was parsed as
        format: SourceFormat,
        /// Parser message
        message: String,
    },

    /// A bundle directory could not be listed
    #[error("Failed to read bundle directory {}: {source}", path.display())]
    DirectoryRead {
        /// Path of the directory
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
