//! Configuration schema definitions using serde.

use lexicon_common::LoggingConfig;
use lexicon_i18n::Locale;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Translation configuration.
    pub i18n: I18nSettings,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Translation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nSettings {
    /// Locale used when a translation is missing.
    pub default_locale: Locale,
    /// Directory whose `<locale>.<ext>` files are loaded first.
    pub directory: Option<PathBuf>,
    /// Explicit bundles, loaded after the directory in order.
    pub bundles: Vec<BundleSource>,
}

/// One translation source bound to a locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleSource {
    /// Locale the source provides.
    pub locale: Locale,
    /// Path to the source, relative paths resolve against the config file.
    pub path: PathBuf,
}
