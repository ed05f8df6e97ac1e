//! Default values.

use crate::schema::{Config, I18nSettings};
use lexicon_common::LoggingConfig;
use lexicon_i18n::Locale;

impl Default for Config {
    fn default() -> Self {
        Self {
            i18n: I18nSettings::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            default_locale: Locale::ENGLISH_US,
            directory: None,
            bundles: Vec::new(),
        }
    }
}
