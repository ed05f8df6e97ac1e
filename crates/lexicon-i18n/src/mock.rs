//! Configurable test double for [`Translate`].

use crate::error::I18nResult;
use crate::locale::Locale;
use crate::translator::Translate;
use crate::vars::Vars;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::warn;

type SetDefaultFn = Box<dyn Fn(&Locale) + Send + Sync>;
type LoadBundleFn = Box<dyn Fn(&Locale, &Path) -> I18nResult<()> + Send + Sync>;
type GetFn = Box<dyn Fn(&Locale, &str, &Vars) -> String + Send + Sync>;
type GetLocalizationsFn = Box<dyn Fn(&str, &Vars) -> HashMap<Locale, String> + Send + Sync>;

/// A call received by a [`MockTranslator`]
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    /// `set_default(locale)`
    SetDefault(Locale),
    /// `load_bundle(locale, path)`
    LoadBundle(Locale, PathBuf),
    /// `get(locale, key, variables)`
    Get(Locale, String, Vars),
    /// `get_localizations(key, variables)`
    GetLocalizations(String, Vars),
}

/// A [`Translate`] implementation whose behaviour is supplied per method.
///
/// Unconfigured methods log a warning and return an empty value: `Ok(())`,
/// an empty string or an empty map. Every call is recorded either way.
#[derive(Default)]
pub struct MockTranslator {
    set_default_fn: Option<SetDefaultFn>,
    load_bundle_fn: Option<LoadBundleFn>,
    get_fn: Option<GetFn>,
    get_localizations_fn: Option<GetLocalizationsFn>,
    calls: Mutex<Vec<MockCall>>,
}

impl MockTranslator {
    /// Create a mock with no configured behaviour
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure `set_default`
    #[must_use]
    pub fn on_set_default(mut self, f: impl Fn(&Locale) + Send + Sync + 'static) -> Self {
        self.set_default_fn = Some(Box::new(f));
        self
    }

    /// Configure `load_bundle`
    #[must_use]
    pub fn on_load_bundle(
        mut self,
        f: impl Fn(&Locale, &Path) -> I18nResult<()> + Send + Sync + 'static,
    ) -> Self {
        self.load_bundle_fn = Some(Box::new(f));
        self
    }

    /// Configure `get`
    #[must_use]
    pub fn on_get(mut self, f: impl Fn(&Locale, &str, &Vars) -> String + Send + Sync + 'static) -> Self {
        self.get_fn = Some(Box::new(f));
        self
    }

    /// Configure `get_localizations`
    #[must_use]
    pub fn on_get_localizations(
        mut self,
        f: impl Fn(&str, &Vars) -> HashMap<Locale, String> + Send + Sync + 'static,
    ) -> Self {
        self.get_localizations_fn = Some(Box::new(f));
        self
    }

    /// Every call received so far, oldest first
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().clone()
    }

    /// Forget recorded calls
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    fn record(&self, call: MockCall) {
        self.calls.lock().push(call);
    }
}

impl fmt::Debug for MockTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockTranslator")
            .field("set_default_fn", &self.set_default_fn.is_some())
            .field("load_bundle_fn", &self.load_bundle_fn.is_some())
            .field("get_fn", &self.get_fn.is_some())
            .field("get_localizations_fn", &self.get_localizations_fn.is_some())
            .field("calls", &self.calls.lock().len())
            .finish()
    }
}

impl Translate for MockTranslator {
    fn set_default(&mut self, locale: Locale) {
        self.record(MockCall::SetDefault(locale.clone()));
        match &self.set_default_fn {
            Some(f) => f(&locale),
            None => warn!("set_default not mocked"),
        }
    }

    fn load_bundle(&mut self, locale: Locale, path: &Path) -> I18nResult<()> {
        self.record(MockCall::LoadBundle(locale.clone(), path.to_path_buf()));
        match &self.load_bundle_fn {
            Some(f) => f(&locale, path),
            None => {
                warn!("load_bundle not mocked");
                Ok(())
            }
        }
    }

    fn get(&self, locale: &Locale, key: &str, variables: &Vars) -> String {
        self.record(MockCall::Get(locale.clone(), key.to_string(), variables.clone()));
        match &self.get_fn {
            Some(f) => f(locale, key, variables),
            None => {
                warn!("get not mocked");
                String::new()
            }
        }
    }

    fn get_localizations(&self, key: &str, variables: &Vars) -> HashMap<Locale, String> {
        self.record(MockCall::GetLocalizations(key.to_string(), variables.clone()));
        match &self.get_localizations_fn {
            Some(f) => f(key, variables),
            None => {
                warn!("get_localizations not mocked");
                HashMap::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vars;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_unconfigured_mock_is_a_no_op() {
        let mut mock = MockTranslator::new();
        mock.set_default(Locale::CHINESE_CN);
        assert!(mock.load_bundle(Locale::SPANISH_ES, Path::new("")).is_ok());
        assert!(mock.get(&Locale::CROATIAN, "", &Vars::new()).is_empty());
        assert!(mock.get_localizations("", &Vars::new()).is_empty());
        assert_eq!(mock.calls().len(), 4);
    }

    #[test]
    fn test_configured_closures_are_called() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = |hits: &Arc<AtomicUsize>| {
            let hits = Arc::clone(hits);
            move || {
                hits.fetch_add(1, Ordering::SeqCst);
            }
        };

        let (a, b, c, d) = (counter(&hits), counter(&hits), counter(&hits), counter(&hits));
        let mut mock = MockTranslator::new()
            .on_set_default(move |_| a())
            .on_load_bundle(move |_, _| {
                b();
                Ok(())
            })
            .on_get(move |_, key, _| {
                c();
                format!("mocked {key}")
            })
            .on_get_localizations(move |key, _| {
                d();
                HashMap::from([(Locale::FRENCH, key.to_string())])
            });

        mock.set_default(Locale::CHINESE_CN);
        mock.load_bundle(Locale::SPANISH_ES, Path::new("es.json")).unwrap();
        assert_eq!(mock.get(&Locale::CROATIAN, "hi", &Vars::new()), "mocked hi");
        assert_eq!(mock.get_localizations("hi", &Vars::new())[&Locale::FRENCH], "hi");
        assert_eq!(hits.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_get_localizations_does_not_depend_on_get() {
        let mock = MockTranslator::new()
            .on_get_localizations(|_, _| HashMap::from([(Locale::GERMAN, "hallo".to_string())]));

        assert_eq!(mock.get_localizations("hi", &Vars::new()).len(), 1);
        assert!(mock.get(&Locale::GERMAN, "hi", &Vars::new()).is_empty());
    }

    #[test]
    fn test_calls_are_recorded_in_order() {
        let mut mock = MockTranslator::new();
        let values = vars! { "Hi" => "There" };

        mock.set_default(Locale::ITALIAN);
        mock.get(&Locale::FRENCH, "key", &values);
        mock.get_localizations("key", &values);

        assert_eq!(
            mock.calls(),
            vec![
                MockCall::SetDefault(Locale::ITALIAN),
                MockCall::Get(Locale::FRENCH, "key".to_string(), values.clone()),
                MockCall::GetLocalizations("key".to_string(), values),
            ]
        );

        mock.clear_calls();
        assert!(mock.calls().is_empty());
    }
}
