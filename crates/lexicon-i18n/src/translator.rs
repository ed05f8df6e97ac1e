//! Translation resolution: locale fallback, phrasing selection and
//! interpolation.

use crate::bundle::Bundle;
use crate::error::{I18nError, I18nResult};
use crate::loader::BundleLoader;
use crate::locale::Locale;
use crate::source::SourceFormat;
use crate::template::{self, LEFT_DELIM};
use crate::vars::Vars;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// The capability set shared by the real resolver and its test double.
///
/// `set_default` and `load_bundle` require exclusive access and belong to
/// initialization; `get` and `get_localizations` are read-only and may be
/// called from any number of threads afterwards.
pub trait Translate: Send + Sync {
    /// Set the locale used as a fallback
    fn set_default(&mut self, locale: Locale);

    /// Load the translation source at `path` as the active bundle of `locale`
    fn load_bundle(&mut self, locale: Locale, path: &Path) -> I18nResult<()>;

    /// Get a translation for `key`, falling back to the default locale and
    /// finally to `key` itself
    fn get(&self, locale: &Locale, key: &str, variables: &Vars) -> String;

    /// Get the translation of `key` for every locale with an active bundle
    fn get_localizations(&self, key: &str, variables: &Vars) -> HashMap<Locale, String>;

    /// Load every supported source in `dir`, keyed by file stem
    /// (`fr.json` becomes the bundle of `fr`).
    ///
    /// Files are loaded in name order through [`Translate::load_bundle`]. A
    /// file that fails to load is skipped with a warning, as is a file whose
    /// stem was already loaded (`fr.yaml` after `fr.json`). Only an
    /// unreadable directory is an error.
    fn load_directory(&mut self, dir: &Path) -> I18nResult<Vec<Locale>> {
        let read_dir = |source| I18nError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(read_dir)? {
            let path = entry.map_err(read_dir)?.path();
            if path.is_file() && SourceFormat::is_supported(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        let mut loaded = Vec::new();
        for path in paths {
            let Some(locale) = locale_from_path(&path) else {
                continue;
            };
            if loaded.contains(&locale) {
                warn!(
                    "Skipping translation source {:?}: locale {} already loaded from this directory",
                    path, locale
                );
                continue;
            }
            match self.load_bundle(locale.clone(), &path) {
                Ok(()) => loaded.push(locale),
                Err(e) => warn!("Skipping translation source {:?}: {}", path, e),
            }
        }

        info!("Loaded {} locales from {:?}", loaded.len(), dir);
        Ok(loaded)
    }
}

/// Resolves keys against per-locale bundles.
#[derive(Debug)]
pub struct Translator {
    default_locale: Locale,
    translations: HashMap<Locale, Arc<Bundle>>,
    loader: BundleLoader,
    /// Seeded generator; `None` draws from fastrand's thread-local one
    rng: Option<Mutex<fastrand::Rng>>,
}

impl Translator {
    /// Create a translator with no bundles and `en-US` as default locale
    pub fn new() -> Self {
        Self {
            default_locale: Locale::default(),
            translations: HashMap::new(),
            loader: BundleLoader::new(),
            rng: None,
        }
    }

    /// Create a translator whose phrasing selection is reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Some(Mutex::new(fastrand::Rng::with_seed(seed))),
            ..Self::new()
        }
    }

    /// Install an already built bundle as the active bundle of `locale`
    pub fn install_bundle(&mut self, locale: Locale, bundle: Arc<Bundle>) {
        debug!("Installing bundle with {} keys for locale {}", bundle.len(), locale);
        self.translations.insert(locale, bundle);
    }

    /// Get the default locale
    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Get all locales with an active bundle
    pub fn loaded_locales(&self) -> Vec<&Locale> {
        self.translations.keys().collect()
    }

    /// Get the active bundle of a locale
    pub fn bundle(&self, locale: &Locale) -> Option<&Arc<Bundle>> {
        self.translations.get(locale)
    }

    /// Number of keys in the active bundle of a locale
    pub fn translation_count(&self, locale: &Locale) -> usize {
        self.translations.get(locale).map_or(0, |bundle| bundle.len())
    }

    /// Paths whose parse is cached
    pub fn cached_sources(&self) -> Vec<&Path> {
        self.loader.paths().collect()
    }

    /// Whether `get` would resolve `key` to a translation rather than to the
    /// key itself
    pub fn has_translation(&self, locale: &Locale, key: &str) -> bool {
        self.candidates(locale, key).is_some()
    }

    fn candidates(&self, locale: &Locale, key: &str) -> Option<&[String]> {
        let lookup = |locale: &Locale| {
            self.translations
                .get(locale)
                .and_then(|bundle| bundle.get(key))
                .filter(|candidates| !candidates.is_empty())
        };

        lookup(locale).or_else(|| {
            if locale == &self.default_locale {
                None
            } else {
                debug!(
                    "Key '{}' not found for locale {}, falling back to default locale {}",
                    key, locale, self.default_locale
                );
                lookup(&self.default_locale)
            }
        })
    }

    fn pick<'a>(&self, candidates: &'a [String]) -> &'a str {
        let index = match (&self.rng, candidates.len()) {
            (_, 1) => 0,
            (Some(rng), len) => rng.lock().usize(..len),
            (None, len) => fastrand::usize(..len),
        };
        &candidates[index]
    }

    fn render(raw: &str, variables: &Vars) -> String {
        if variables.is_empty() || !raw.contains(LEFT_DELIM) {
            return raw.to_string();
        }

        template::interpolate(raw, variables).unwrap_or_else(|e| {
            trace!("Interpolation of '{}' failed, using raw phrasing: {}", raw, e);
            raw.to_string()
        })
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translate for Translator {
    fn set_default(&mut self, locale: Locale) {
        debug!("Default locale set to {}", locale);
        self.default_locale = locale;
    }

    fn load_bundle(&mut self, locale: Locale, path: &Path) -> I18nResult<()> {
        let bundle = self.loader.load(path)?;
        info!(
            "Loaded {} translations for locale {} from {:?}",
            bundle.len(),
            locale,
            path
        );
        self.translations.insert(locale, bundle);
        Ok(())
    }

    fn get(&self, locale: &Locale, key: &str, variables: &Vars) -> String {
        match self.candidates(locale, key) {
            Some(candidates) => Self::render(self.pick(candidates), variables),
            None => key.to_string(),
        }
    }

    fn get_localizations(&self, key: &str, variables: &Vars) -> HashMap<Locale, String> {
        self.translations
            .keys()
            .map(|locale| (locale.clone(), self.get(locale, key, variables)))
            .collect()
    }
}

fn locale_from_path(path: &Path) -> Option<Locale> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(Locale::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vars;

    fn translator_with(bundles: Vec<(Locale, Bundle)>) -> Translator {
        let mut translator = Translator::with_seed(7);
        for (locale, bundle) in bundles {
            translator.install_bundle(locale, Arc::new(bundle));
        }
        translator
    }

    fn single(key: &str, phrasings: &[&str]) -> Bundle {
        Bundle::from_entries([(key, phrasings.to_vec())])
    }

    #[test]
    fn test_new_is_empty() {
        let translator = Translator::new();
        assert!(translator.loaded_locales().is_empty());
        assert!(translator.cached_sources().is_empty());
        assert_eq!(translator.default_locale(), &Locale::ENGLISH_US);
    }

    #[test]
    fn test_set_default() {
        let mut translator = Translator::new();
        translator.set_default(Locale::ITALIAN);
        assert_eq!(translator.default_locale(), &Locale::ITALIAN);
    }

    #[test]
    fn test_no_bundle_returns_key() {
        let translator = Translator::new();
        assert_eq!(translator.get(&Locale::DUTCH, "hi", &Vars::new()), "hi");
        assert_eq!(translator.get(&Locale::ENGLISH_US, "hi", &Vars::new()), "hi");
    }

    #[test]
    fn test_fallback_to_default_locale() {
        let translator = translator_with(vec![
            (Locale::DUTCH, single("hi", &["hallo"])),
            (Locale::ENGLISH_US, single("bye", &["see you"])),
        ]);

        assert_eq!(translator.get(&Locale::DUTCH, "hi", &Vars::new()), "hallo");
        assert_eq!(translator.get(&Locale::DUTCH, "bye", &Vars::new()), "see you");
        assert_eq!(translator.get(&Locale::FRENCH, "bye", &Vars::new()), "see you");
        assert_eq!(translator.get(&Locale::DUTCH, "nope", &Vars::new()), "nope");
        assert!(translator.has_translation(&Locale::DUTCH, "bye"));
        assert!(!translator.has_translation(&Locale::DUTCH, "nope"));
    }

    #[test]
    fn test_default_locale_does_not_see_other_bundles() {
        let translator = translator_with(vec![(Locale::DUTCH, single("hi", &["hallo"]))]);
        assert_eq!(translator.get(&Locale::ENGLISH_US, "hi", &Vars::new()), "hi");
    }

    #[test]
    fn test_interpolation_only_with_variables() {
        let translator = translator_with(vec![(Locale::ENGLISH_US, single("hi", &["hi {{ .Name }}"]))]);

        assert_eq!(
            translator.get(&Locale::ENGLISH_US, "hi", &vars! { "Name" => "Bob" }),
            "hi Bob"
        );
        assert_eq!(
            translator.get(&Locale::ENGLISH_US, "hi", &Vars::new()),
            "hi {{ .Name }}"
        );
        assert_eq!(
            translator.get(&Locale::ENGLISH_US, "hi", &vars! { "Other" => 1 }),
            "hi {{ .Name }}"
        );
    }

    #[test]
    fn test_seeded_selection_covers_all_candidates() {
        let translator = translator_with(vec![(
            Locale::ENGLISH_US,
            single("greet", &["hey", "hello", "howdy"]),
        )]);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let phrasing = translator.get(&Locale::ENGLISH_US, "greet", &Vars::new());
            assert!(["hey", "hello", "howdy"].contains(&phrasing.as_str()));
            seen.insert(phrasing);
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_get_localizations_covers_every_loaded_locale() {
        let translator = translator_with(vec![
            (Locale::ENGLISH_US, single("hi", &["hello"])),
            (Locale::FRENCH, single("hi", &["salut"])),
            (Locale::GERMAN, single("bye", &["tschüss"])),
        ]);

        let localizations = translator.get_localizations("hi", &Vars::new());
        assert_eq!(localizations.len(), 3);
        assert_eq!(localizations[&Locale::FRENCH], "salut");
        assert_eq!(localizations[&Locale::GERMAN], "hello");
        assert!(Translator::new().get_localizations("hi", &Vars::new()).is_empty());
    }

    #[test]
    fn test_translator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Translator>();
    }
}
