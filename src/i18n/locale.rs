// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale tag validation.
//!
//! Accepts the tags Rails-style locale files are keyed by: an ISO 639
//! language subtag, optionally followed by a region (`en-GB`, `pt_BR`) or a
//! UN M.49 area code (`es-419`). Underscores are normalised to hyphens.

use crate::error::{CountrySelectError, Result};

/// Whether `tag` is a well-formed locale tag.
///
/// # Examples
/// ```
/// assert!(country_select::i18n::is_valid_locale("da"));
/// assert!(country_select::i18n::is_valid_locale("pt_BR"));
/// assert!(!country_select::i18n::is_valid_locale("Danish"));
/// ```
pub fn is_valid_locale(tag: &str) -> bool {
    let mut parts = tag.splitn(2, |c: char| c == '-' || c == '_');
    let language = parts.next().unwrap_or_default();
    let language_ok = (2..=3).contains(&language.len())
        && language.bytes().all(|b| b.is_ascii_lowercase());
    if !language_ok {
        return false;
    }
    match parts.next() {
        None => true,
        Some(region) => {
            (region.len() == 2 && region.bytes().all(|b| b.is_ascii_uppercase()))
                || (region.len() == 3 && region.bytes().all(|b| b.is_ascii_digit()))
        }
    }
}

/// Validate `tag` and rewrite `pt_BR` as `pt-BR`.
pub fn normalize_locale(tag: &str) -> Result<String> {
    let tag = tag.trim();
    if is_valid_locale(tag) {
        Ok(tag.replace('_', "-"))
    } else {
        Err(CountrySelectError::InvalidLocale(tag.to_string()))
    }
}

/// English name of the language part of a locale tag, for display.
///
/// Returns `None` for languages outside this short list.
pub fn language_name(tag: &str) -> Option<&'static str> {
    let language = tag.split(|c: char| c == '-' || c == '_').next()?;
    match language {
        "da" => Some("Danish"),
        "de" => Some("German"),
        "en" => Some("English"),
        "es" => Some("Spanish"),
        "fi" => Some("Finnish"),
        "fr" => Some("French"),
        "is" => Some("Icelandic"),
        "it" => Some("Italian"),
        "ja" => Some("Japanese"),
        "nb" => Some("Norwegian Bokmål"),
        "nl" => Some("Dutch"),
        "nn" => Some("Norwegian Nynorsk"),
        "pl" => Some("Polish"),
        "pt" => Some("Portuguese"),
        "ru" => Some("Russian"),
        "sv" => Some("Swedish"),
        "zh" => Some("Chinese"),
        _ => None,
    }
}
