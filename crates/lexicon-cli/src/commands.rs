//! Sub-command execution.

use crate::cli::{to_vars, Command};
use anyhow::{bail, Result};
use lexicon_i18n::{Locale, Translate, Translator};
use std::collections::BTreeMap;

/// Run a command against a prepared translator and return its output.
pub fn execute(command: &Command, translator: &Translator) -> Result<String> {
    match command {
        Command::Get { locale, key, vars } => {
            let locale = Locale::from(locale.as_str());
            Ok(translator.get(&locale, key, &to_vars(vars)))
        }
        Command::Localizations { key, vars, json } => {
            let localizations: BTreeMap<Locale, String> = translator
                .get_localizations(key, &to_vars(vars))
                .into_iter()
                .collect();

            if *json {
                Ok(serde_json::to_string_pretty(&localizations)?)
            } else {
                Ok(localizations
                    .iter()
                    .map(|(locale, value)| format!("{locale}\t{value}"))
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }
        Command::Keys { locale } => {
            let locale = Locale::from(locale.as_str());
            let Some(bundle) = translator.bundle(&locale) else {
                bail!("no bundle loaded for locale {locale}");
            };

            let mut keys: Vec<&str> = bundle.keys().collect();
            keys.sort_unstable();
            Ok(keys.join("\n"))
        }
    }
}
