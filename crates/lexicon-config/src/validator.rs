//! Runtime validation of loaded configuration.

use crate::error::{ConfigError, ConfigResult};
use crate::schema::Config;
use lexicon_i18n::Locale;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &Config) -> ConfigResult<()> {
        config.validate()
    }
}

impl Config {
    /// Check locales, paths and the log level.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_locale("i18n.default_locale", &self.i18n.default_locale)?;

        if let Some(directory) = &self.i18n.directory {
            if directory.as_os_str().is_empty() {
                return Err(ConfigError::Validation(
                    "i18n.directory must not be empty".to_string(),
                ));
            }
        }

        for (index, bundle) in self.i18n.bundles.iter().enumerate() {
            validate_locale(&format!("i18n.bundles[{index}].locale"), &bundle.locale)?;
            if bundle.path.as_os_str().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "i18n.bundles[{index}].path must not be empty"
                )));
            }
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.level must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn validate_locale(field: &str, locale: &Locale) -> ConfigResult<()> {
    let code = locale.as_str();
    if code.is_empty() {
        return Err(ConfigError::Validation(format!("{field} must not be empty")));
    }
    if code.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "{field} '{code}' must not contain whitespace"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::BundleSource;
    use std::path::PathBuf;

    #[test]
    fn test_default_is_valid() {
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_default_locale_rejected() {
        let mut config = Config::default();
        config.i18n.default_locale = Locale::from("");
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_bundle_entries_checked() {
        let mut config = Config::default();
        config.i18n.bundles.push(BundleSource {
            locale: Locale::from("en US"),
            path: PathBuf::from("en.json"),
        });
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("i18n.bundles[0].locale"));

        config.i18n.bundles[0] = BundleSource {
            locale: Locale::FRENCH,
            path: PathBuf::new(),
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("i18n.bundles[0].path"));
    }

    #[test]
    fn test_blank_log_level_rejected() {
        let mut config = Config::default();
        config.logging.level = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
