// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation backends for country labels.
//!
//! ## Design
//!
//! Country names are looked up under the `countries` scope, so the key for
//! `"Denmark"` is `"countries.Denmark"`. A backend implements [`Translate`]:
//! one `lookup` per key, failing with [`MissingTranslation`] when it has no
//! entry. Whether a backend is configured at all is a separate, explicit
//! state carried by [`Translator`]; an absent backend is never modelled as a
//! backend that fails every lookup.
//!
//! [`Catalog`] is the bundled backend. It reads Rails-style locale YAML:
//!
//! ```yaml
//! da:
//!   countries:
//!     Denmark: Danmark
//! ```

mod catalog;
mod locale;

pub use catalog::{Catalog, LocaleStrings};
pub use locale::{is_valid_locale, language_name, normalize_locale};

/// Scope prepended to every country lookup key.
pub const COUNTRY_SCOPE: &str = "countries";

/// Lookup key for a country name.
pub fn country_key(name: &str) -> String {
    format!("{}.{}", COUNTRY_SCOPE, name)
}

/// The backend has no entry for `key`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("translation missing: {key}")]
pub struct MissingTranslation {
    pub key: String,
}

impl MissingTranslation {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// A lookup-by-key translation backend.
pub trait Translate: Send + Sync {
    fn lookup(&self, key: &str) -> Result<String, MissingTranslation>;
}

impl<F> Translate for F
where
    F: Fn(&str) -> Result<String, MissingTranslation> + Send + Sync,
{
    fn lookup(&self, key: &str) -> Result<String, MissingTranslation> {
        self(key)
    }
}

/// Either a configured backend, or none at all.
#[derive(Clone, Copy, Default)]
pub enum Translator<'a> {
    #[default]
    Unavailable,
    Available(&'a dyn Translate),
}

impl<'a> Translator<'a> {
    pub fn new(backend: &'a dyn Translate) -> Self {
        Translator::Available(backend)
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Translator::Available(_))
    }
}

impl<'a, T: Translate> From<Option<&'a T>> for Translator<'a> {
    fn from(backend: Option<&'a T>) -> Self {
        match backend {
            Some(backend) => Translator::Available(backend),
            None => Translator::Unavailable,
        }
    }
}

impl std::fmt::Debug for Translator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Translator::Unavailable => f.write_str("Translator::Unavailable"),
            Translator::Available(_) => f.write_str("Translator::Available(..)"),
        }
    }
}
