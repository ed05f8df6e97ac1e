//! Integration tests for lexicon-config crate.
//!
//! These tests load a configuration from disk and apply it to real and mock
//! translators.

use lexicon_common::test_utils::{bundle_fixtures, create_temp_dir, init_test_logging, write_fixture};
use lexicon_config::{ConfigError, ConfigLoader};
use lexicon_i18n::{vars, I18nError, Locale, MockCall, MockTranslator, Translate, Translator, Vars};
use std::fs;

const CONFIG: &str = r"
i18n:
  default_locale: en-US
  directory: locales
  bundles:
    - locale: en-GB
      path: locales/en-US.json
";

#[test]
fn test_config_drives_translator_setup() {
    init_test_logging();
    let dir = create_temp_dir();
    fs::create_dir(dir.path().join("locales")).unwrap();
    write_fixture(&dir.path().join("locales"), "en-US.json", bundle_fixtures::SECONDARY_JSON);
    write_fixture(&dir.path().join("locales"), "fr.json", bundle_fixtures::NOMINAL_JSON);
    let config_path = write_fixture(dir.path(), "lexicon.yaml", CONFIG);

    let config = ConfigLoader::new(&config_path)
        .load_with_env(|_| None)
        .unwrap();
    let mut translator = Translator::new();
    let loaded = config.apply(&mut translator).unwrap();

    assert_eq!(loaded, vec![Locale::ENGLISH_US, Locale::FRENCH, Locale::ENGLISH_GB]);
    // en-GB reuses the parse of the directory's en-US source
    assert_eq!(translator.cached_sources().len(), 2);
    assert_eq!(
        translator.get(&Locale::FRENCH, "hi", &vars! { "Test" => "config" }),
        "this is a config"
    );
    assert_eq!(translator.get(&Locale::ENGLISH_GB, "bye", &Vars::new()), "see you");
    assert_eq!(translator.get_localizations("bye", &Vars::new()).len(), 3);
}

#[test]
fn test_failing_explicit_bundle_aborts_setup() {
    let dir = create_temp_dir();
    let config_path = write_fixture(
        dir.path(),
        "lexicon.yaml",
        "i18n:\n  bundles:\n    - locale: fr\n      path: missing.json\n",
    );

    let config = ConfigLoader::new(&config_path)
        .load_with_env(|_| None)
        .unwrap();
    let err = config.apply(&mut Translator::new()).unwrap_err();
    assert!(matches!(err, ConfigError::I18n(I18nError::SourceRead { .. })));
}

#[test]
fn test_apply_through_mock() {
    let dir = create_temp_dir();
    let config_path = write_fixture(
        dir.path(),
        "lexicon.yaml",
        "i18n:\n  default_locale: it\n  bundles:\n    - locale: fr\n      path: fr.json\n",
    );

    let config = ConfigLoader::new(&config_path)
        .load_with_env(|_| None)
        .unwrap();
    let mut mock = MockTranslator::new();
    config.apply(&mut mock).unwrap();

    assert_eq!(
        mock.calls(),
        vec![
            MockCall::SetDefault(Locale::ITALIAN),
            MockCall::LoadBundle(Locale::FRENCH, dir.path().join("fr.json")),
        ]
    );
}
