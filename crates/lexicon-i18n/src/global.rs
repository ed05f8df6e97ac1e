//! Process-wide convenience functions.
//!
//! Hosts that prefer not to pass a [`Translator`] around can use these
//! functions, which forward to a shared instance. The instance starts as an
//! empty [`Translator`] and may be swapped with [`install`], typically for a
//! [`MockTranslator`](crate::MockTranslator) in tests.

use crate::error::I18nResult;
use crate::locale::Locale;
use crate::translator::{Translate, Translator};
use crate::vars::{merge_vars, Vars};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::Path;

static INSTANCE: Lazy<RwLock<Box<dyn Translate>>> =
    Lazy::new(|| RwLock::new(Box::new(Translator::new())));

/// Replace the shared instance, returning the previous one
pub fn install(translator: Box<dyn Translate>) -> Box<dyn Translate> {
    std::mem::replace(&mut *INSTANCE.write(), translator)
}

/// Set the locale used as a fallback. Intended for initialization.
pub fn set_default(locale: impl Into<Locale>) {
    INSTANCE.write().set_default(locale.into());
}

/// Load a translation source for a locale. Intended for initialization.
pub fn load_bundle(locale: impl Into<Locale>, path: impl AsRef<Path>) -> I18nResult<()> {
    INSTANCE.write().load_bundle(locale.into(), path.as_ref())
}

/// Get a translation, merging `values` left-to-right into one variable map.
///
/// When `key` is missing for `locale` the default locale is used instead, and
/// when it is missing there too `key` itself is returned. When several
/// phrasings exist one is picked at random.
pub fn get(locale: &Locale, key: &str, values: &[&Vars]) -> String {
    let variables = merge_vars(values.iter().copied());
    INSTANCE.read().get(locale, key, &variables)
}

/// Get the translation of `key` for every loaded locale, merging `values`
/// like [`get`].
///
/// The result plugs straight into the localization maps Discord expects for
/// command names and descriptions.
pub fn get_localizations(key: &str, values: &[&Vars]) -> HashMap<Locale, String> {
    let variables = merge_vars(values.iter().copied());
    INSTANCE.read().get_localizations(key, &variables)
}
