//! # Lexicon I18n
//!
//! Locale-aware translation lookup for bot command frameworks.
//!
//! This crate provides:
//!
//! - Loading of nested JSON, YAML or TOML sources into flat bundles
//! - Per-path parse caching so one source can serve several locales
//! - Fallback to a default locale, then to the key itself
//! - Random selection among several phrasings of a key
//! - `{{ .Name }}` style interpolation of caller-supplied variables
//!
//! # Example
//!
//! ```rust,no_run
//! use lexicon_i18n::{vars, Locale, Translate, Translator};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut translator = Translator::new();
//! translator.set_default(Locale::ENGLISH_US);
//! translator.load_bundle(Locale::ENGLISH_US, Path::new("locales/en-US.json"))?;
//! translator.load_bundle(Locale::FRENCH, Path::new("locales/fr.json"))?;
//!
//! let greeting = translator.get(&Locale::FRENCH, "command.greet", &vars! { "Name" => "Bob" });
//! println!("{}", greeting);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bundle;
pub mod error;
pub mod global;
pub mod loader;
pub mod locale;
pub mod mock;
pub mod source;
pub mod template;
pub mod translator;
pub mod vars;

pub use bundle::{Bundle, KEY_DELIMITER};
pub use error::{I18nError, I18nResult};
pub use loader::BundleLoader;
pub use locale::Locale;
pub use mock::{MockCall, MockTranslator};
pub use source::SourceFormat;
pub use template::{Template, TemplateError};
pub use translator::{Translate, Translator};
pub use vars::{merge_vars, render_value, Vars};

// Re-exported for the `vars!` macro
#[doc(hidden)]
pub use serde_json;
