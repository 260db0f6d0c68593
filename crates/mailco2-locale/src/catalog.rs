//! Embedded message catalogs and locale resolution.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;

/// Locale used when the requested one is not available.
pub const DEFAULT_LOCALE: &str = "en";

/// Embedded catalogs, keyed by language code.
const EMBEDDED: &[(&str, &str)] = &[
    ("en", include_str!("../data/en.json")),
    ("fr", include_str!("../data/fr.json")),
];

/// Global catalog registry.
static CATALOGS: OnceLock<Catalogs> = OnceLock::new();

/// Errors raised while loading a catalog.
#[derive(Error, Debug)]
pub enum LocaleError {
    /// The catalog JSON is malformed.
    #[error("Invalid catalog for locale {locale}: {source}")]
    Parse {
        /// Locale being loaded.
        locale: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// The decimal separator is not exactly one character.
    #[error("Invalid decimal separator for locale {locale}: {separator:?}")]
    DecimalSeparator {
        /// Locale being loaded.
        locale: String,
        /// The rejected separator.
        separator: String,
    },
}

/// Synchronous key to string resolution for the active UI locale.
pub trait Localizer {
    /// Returns the language code of the active locale.
    fn locale(&self) -> &str;

    /// Looks up a message by key.
    fn lookup(&self, key: &str) -> Option<&str>;

    /// Returns the decimal separator of the active locale.
    fn decimal_separator(&self) -> char;

    /// Looks up a message, returning an empty string for unknown keys.
    fn message(&self, key: &str) -> &str {
        self.lookup(key).unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCatalog {
    decimal_separator: String,
    messages: HashMap<String, String>,
}

/// Messages of a single locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    locale: String,
    decimal_separator: char,
    messages: HashMap<String, String>,
}

impl Catalog {
    /// Parses a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or the decimal separator is not
    /// a single character.
    pub fn from_json(locale: impl Into<String>, json: &str) -> Result<Self, LocaleError> {
        let locale = locale.into();
        let raw: RawCatalog = serde_json::from_str(json).map_err(|source| LocaleError::Parse {
            locale: locale.clone(),
            source,
        })?;

        let mut chars = raw.decimal_separator.chars();
        let decimal_separator = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(LocaleError::DecimalSeparator {
                    locale,
                    separator: raw.decimal_separator,
                });
            }
        };

        Ok(Self {
            locale,
            decimal_separator,
            messages: raw.messages,
        })
    }

    /// Returns a copy of this catalog using another decimal separator.
    #[must_use]
    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Returns a copy of this catalog with one message replaced.
    #[must_use]
    pub fn with_message(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.messages.insert(key.into(), value.into());
        self
    }

    /// Returns the number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if the catalog has no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Localizer for Catalog {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    fn decimal_separator(&self) -> char {
        self.decimal_separator
    }
}

/// Registry of the embedded catalogs.
#[derive(Debug)]
pub struct Catalogs {
    catalogs: HashMap<String, Catalog>,
}

impl Catalogs {
    /// Returns the global registry.
    ///
    /// The catalogs are parsed lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        CATALOGS.get_or_init(Self::load)
    }

    fn load() -> Self {
        let catalogs = EMBEDDED
            .iter()
            .map(|(locale, json)| {
                let catalog = Catalog::from_json(*locale, json)
                    .unwrap_or_else(|e| panic!("embedded catalog is invalid: {e}"));
                ((*locale).to_string(), catalog)
            })
            .collect();
        Self { catalogs }
    }

    /// Returns the catalog for an exact language code.
    #[must_use]
    pub fn get(&self, locale: &str) -> Option<&Catalog> {
        self.catalogs.get(locale)
    }

    /// Resolves a UI locale such as `fr-FR` or `en_US` to a catalog,
    /// falling back to [`DEFAULT_LOCALE`].
    #[must_use]
    pub fn resolve(&self, locale: &str) -> &Catalog {
        let normalized = locale.trim().to_lowercase().replace('_', "-");
        let language = normalized.split('-').next().unwrap_or_default();

        self.get(&normalized)
            .or_else(|| self.get(language))
            .unwrap_or_else(|| {
                tracing::debug!(locale, "no catalog for locale, using {DEFAULT_LOCALE}");
                self.default_catalog()
            })
    }

    /// Returns the fallback catalog.
    #[must_use]
    pub fn default_catalog(&self) -> &Catalog {
        &self.catalogs[DEFAULT_LOCALE]
    }

    /// Returns the available language codes, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.catalogs.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }
}
