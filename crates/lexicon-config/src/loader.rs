//! Configuration loading from YAML, TOML or JSON files.

use crate::error::{ConfigError, ConfigResult};
use crate::schema::Config;
use lexicon_i18n::{Locale, SourceFormat};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable overriding `i18n.default_locale`
pub const ENV_DEFAULT_LOCALE: &str = "LEXICON_DEFAULT_LOCALE";
/// Environment variable overriding `logging.level`
pub const ENV_LOG_LEVEL: &str = "LEXICON_LOG_LEVEL";

/// Configuration loader.
///
/// The format follows the file extension: `.yaml`/`.yml`, `.toml`, anything
/// else is read as JSON.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the configuration file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads, overrides from the process environment and validates.
    pub fn load(&self) -> ConfigResult<Config> {
        self.load_with_env(|name| std::env::var(name).ok())
    }

    /// Like [`ConfigLoader::load`] with an explicit environment lookup.
    pub fn load_with_env(&self, env: impl Fn(&str) -> Option<String>) -> ConfigResult<Config> {
        debug!("Loading configuration from {:?}", self.path);

        let content = fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;

        let mut config = self.parse(&content)?;
        config.apply_overrides(env);
        if let Some(base) = self.path.parent() {
            config.resolve_paths(base);
        }
        config.validate()?;

        info!(
            "Loaded configuration from {:?} ({} bundles, default locale {})",
            self.path,
            config.i18n.bundles.len(),
            config.i18n.default_locale
        );
        Ok(config)
    }

    fn parse(&self, content: &str) -> ConfigResult<Config> {
        let parsed = match SourceFormat::from_path(&self.path) {
            SourceFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            SourceFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            SourceFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|message| ConfigError::Parse {
            path: self.path.clone(),
            message,
        })
    }
}

impl Config {
    /// Apply `LEXICON_*` overrides found through `env`.
    pub fn apply_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(locale) = env(ENV_DEFAULT_LOCALE) {
            debug!("{} overrides default locale with {}", ENV_DEFAULT_LOCALE, locale);
            self.i18n.default_locale = Locale::from(locale);
        }
        if let Some(level) = env(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
    }

    /// Resolve relative bundle and directory paths against `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        if let Some(directory) = &mut self.i18n.directory {
            *directory = resolve_path(base, directory);
        }
        for bundle in &mut self.i18n.bundles {
            bundle.path = resolve_path(base, &bundle.path);
        }
    }
}

fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexicon_common::test_utils::{create_temp_dir, write_fixture};

    const YAML_CONFIG: &str = r"
i18n:
  default_locale: fr
  directory: locales
  bundles:
    - locale: en-GB
      path: extra/en-GB.json
    - locale: de
      path: /srv/lexicon/de.json
logging:
  level: debug
  format: compact
";

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_load_yaml_resolves_relative_paths() {
        let dir = create_temp_dir();
        let path = write_fixture(dir.path(), "lexicon.yaml", YAML_CONFIG);

        let config = ConfigLoader::new(&path).load_with_env(no_env).unwrap();
        assert_eq!(config.i18n.default_locale, Locale::FRENCH);
        assert_eq!(config.i18n.directory, Some(dir.path().join("locales")));
        assert_eq!(config.i18n.bundles[0].path, dir.path().join("extra/en-GB.json"));
        assert_eq!(config.i18n.bundles[1].path, PathBuf::from("/srv/lexicon/de.json"));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_toml_with_defaults() {
        let dir = create_temp_dir();
        let path = write_fixture(
            dir.path(),
            "lexicon.toml",
            "[[i18n.bundles]]\nlocale = \"ja\"\npath = \"ja.json\"\n",
        );

        let config = ConfigLoader::new(&path).load_with_env(no_env).unwrap();
        assert_eq!(config.i18n.default_locale, Locale::ENGLISH_US);
        assert_eq!(config.i18n.bundles.len(), 1);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_env_overrides() {
        let dir = create_temp_dir();
        let path = write_fixture(dir.path(), "lexicon.json", r#"{"i18n": {"default_locale": "fr"}}"#);

        let config = ConfigLoader::new(&path)
            .load_with_env(|name| match name {
                ENV_DEFAULT_LOCALE => Some("ko".to_string()),
                ENV_LOG_LEVEL => Some("trace".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.i18n.default_locale, Locale::KOREAN);
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn test_missing_and_malformed_files() {
        let dir = create_temp_dir();
        let err = ConfigLoader::new(dir.path().join("absent.yaml"))
            .load_with_env(no_env)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));

        let path = write_fixture(dir.path(), "bad.json", "{ not json");
        let err = ConfigLoader::new(&path).load_with_env(no_env).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let dir = create_temp_dir();
        let path = write_fixture(dir.path(), "lexicon.yaml", "i18n:\n  default_locale: \"\"\n");
        let err = ConfigLoader::new(&path).load_with_env(no_env).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
