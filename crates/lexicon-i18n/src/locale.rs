//! Locale identifiers

use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::fmt;

/// An opaque language/region identifier such as `fr` or `en-US`.
///
/// The resolver only ever compares and hashes locales; no structure is
/// interpreted. Constants are provided for every locale Discord accepts in
/// command localizations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(Cow<'static, str>);

macro_rules! discord_locales {
    ($($name:ident => $code:literal),+ $(,)?) => {
        impl Locale {
            $(
                #[doc = concat!("Discord locale `", $code, "`")]
                pub const $name: Self = Self::from_static($code);
            )+

            /// Every locale Discord accepts for command localizations
            pub const DISCORD: &'static [Self] = &[$(Self::$name),+];
        }
    };
}

discord_locales! {
    INDONESIAN => "id",
    DANISH => "da",
    GERMAN => "de",
    ENGLISH_GB => "en-GB",
    ENGLISH_US => "en-US",
    SPANISH_ES => "es-ES",
    SPANISH_LATAM => "es-419",
    FRENCH => "fr",
    CROATIAN => "hr",
    ITALIAN => "it",
    LITHUANIAN => "lt",
    HUNGARIAN => "hu",
    DUTCH => "nl",
    NORWEGIAN => "no",
    POLISH => "pl",
    PORTUGUESE_BR => "pt-BR",
    ROMANIAN => "ro",
    FINNISH => "fi",
    SWEDISH => "sv-SE",
    VIETNAMESE => "vi",
    TURKISH => "tr",
    CZECH => "cs",
    GREEK => "el",
    BULGARIAN => "bg",
    RUSSIAN => "ru",
    UKRAINIAN => "uk",
    HINDI => "hi",
    THAI => "th",
    CHINESE_CN => "zh-CN",
    JAPANESE => "ja",
    CHINESE_TW => "zh-TW",
    KOREAN => "ko",
}

impl Locale {
    /// Create a locale from any string
    pub fn new(code: impl Into<Cow<'static, str>>) -> Self {
        Self(code.into())
    }

    /// Create a locale from a static string, usable in constants
    pub const fn from_static(code: &'static str) -> Self {
        Self(Cow::Borrowed(code))
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get all locales Discord accepts
    pub fn discord_locales() -> &'static [Self] {
        Self::DISCORD
    }

    /// Whether Discord accepts this locale for command localizations
    pub fn is_discord_locale(&self) -> bool {
        Self::DISCORD.contains(self)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::ENGLISH_US
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Locale {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        Self(Cow::Owned(code.to_string()))
    }
}

impl From<String> for Locale {
    fn from(code: String) -> Self {
        Self(Cow::Owned(code))
    }
}
