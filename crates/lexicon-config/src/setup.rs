//! Installing configured bundles into a translator.

use crate::error::ConfigResult;
use crate::schema::Config;
use lexicon_i18n::{Locale, Translate};
use tracing::info;

impl Config {
    /// Set the default locale, then load the bundle directory (if any) and
    /// every explicit bundle in order.
    ///
    /// Directory entries that fail are skipped; an explicit bundle that fails
    /// aborts setup. Returns the locales loaded, in load order.
    pub fn apply(&self, translator: &mut dyn Translate) -> ConfigResult<Vec<Locale>> {
        translator.set_default(self.i18n.default_locale.clone());

        let mut loaded = match &self.i18n.directory {
            Some(directory) => translator.load_directory(directory)?,
            None => Vec::new(),
        };

        for bundle in &self.i18n.bundles {
            translator.load_bundle(bundle.locale.clone(), &bundle.path)?;
            loaded.push(bundle.locale.clone());
        }

        info!(
            "Translator ready with {} bundles, default locale {}",
            loaded.len(),
            self.i18n.default_locale
        );
        Ok(loaded)
    }
}
