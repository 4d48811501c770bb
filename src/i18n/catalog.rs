// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale catalog loaded from Rails-style YAML locale files.
//!
//! Every top-level key of a document is a locale tag; everything below it is
//! flattened into dotted keys, so
//!
//! ```yaml
//! da:
//!   countries:
//!     Denmark: Danmark
//! ```
//!
//! yields the entry `countries.Denmark => Danmark` for locale `da`. Keys are
//! stored whole and matched exactly, so country names containing dots
//! (`Virgin Islands, U.S.`) still resolve.
//!
//! Loading several documents merges them; a later value for the same key
//! replaces the earlier one.

use super::{normalize_locale, MissingTranslation, Translate, Translator};
use crate::countries::is_json;
use crate::error::{CountrySelectError, Result};
use serde_yaml::Value;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// Flat key/value strings for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleStrings {
    strings: HashMap<String, String>,
}

impl LocaleStrings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    fn extend(&mut self, other: LocaleStrings) {
        self.strings.extend(other.strings);
    }
}

impl Translate for LocaleStrings {
    fn lookup(&self, key: &str) -> Result<String, MissingTranslation> {
        self.get(key)
            .map(str::to_owned)
            .ok_or_else(|| MissingTranslation::new(key))
    }
}

impl<K, V> FromIterator<(K, V)> for LocaleStrings
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut strings = LocaleStrings::new();
        for (key, value) in iter {
            strings.insert(key, value);
        }
        strings
    }
}

/// Strings for every loaded locale, keyed by normalised locale tag.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locales: BTreeMap<String, LocaleStrings>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let mut catalog = Self::new();
        catalog.merge_yaml_str(source)?;
        Ok(catalog)
    }

    /// Add (or merge into) the strings for `locale`.
    pub fn add_locale(&mut self, locale: &str, strings: LocaleStrings) -> Result<()> {
        let locale = normalize_locale(locale)?;
        self.locales.entry(locale).or_default().extend(strings);
        Ok(())
    }

    pub fn merge_yaml_str(&mut self, source: &str) -> Result<()> {
        let document: Value = serde_yaml::from_str(source)?;
        self.merge_document(document)
    }

    pub fn merge_json_str(&mut self, source: &str) -> Result<()> {
        // JSON is a subset of YAML's data model; route it through the same flattening.
        let document: Value = serde_json::from_str(source)?;
        self.merge_document(document)
    }

    /// Merge a locale file from disk (`.json` as JSON, anything else as YAML).
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let source = fs::read_to_string(path).map_err(|e| CountrySelectError::io(path, e))?;
        if is_json(path) {
            self.merge_json_str(&source)?;
        } else {
            self.merge_yaml_str(&source)?;
        }
        tracing::info!(
            path = %path.display(),
            locales = ?self.locales.keys().collect::<Vec<_>>(),
            "loaded locale file"
        );
        Ok(())
    }

    fn merge_document(&mut self, document: Value) -> Result<()> {
        let root = match document {
            Value::Mapping(root) => root,
            Value::Null => return Ok(()),
            _ => {
                return Err(CountrySelectError::MalformedCatalog(
                    "top level must map locale tags to entries".to_string(),
                ))
            }
        };

        for (locale, body) in root {
            let tag = key_segment(&locale).ok_or_else(|| {
                CountrySelectError::MalformedCatalog(format!("bad locale key {:?}", locale))
            })?;
            if !matches!(body, Value::Mapping(_)) {
                return Err(CountrySelectError::MalformedCatalog(format!(
                    "locale {:?} must contain a mapping",
                    tag
                )));
            }
            let mut strings = LocaleStrings::new();
            flatten_into("", &body, &mut strings);
            self.add_locale(&tag, strings)?;
        }
        Ok(())
    }

    pub fn locale(&self, locale: &str) -> Option<&LocaleStrings> {
        let locale = normalize_locale(locale).ok()?;
        self.locales.get(&locale)
    }

    /// Loaded locale tags, sorted.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Backend for `locale`, or [`Translator::Unavailable`] if it was never loaded.
    pub fn translator(&self, locale: &str) -> Translator<'_> {
        match self.locale(locale) {
            Some(strings) => Translator::Available(strings),
            None => {
                tracing::debug!(locale, "locale not in catalog, translation disabled");
                Translator::Unavailable
            }
        }
    }
}

fn key_segment(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn flatten_into(prefix: &str, value: &Value, out: &mut LocaleStrings) {
    match value {
        Value::Mapping(map) => {
            for (key, child) in map {
                let Some(segment) = key_segment(key) else {
                    continue;
                };
                let path = if prefix.is_empty() {
                    segment
                } else {
                    format!("{}.{}", prefix, segment)
                };
                flatten_into(&path, child, out);
            }
        }
        Value::String(s) => out.insert(prefix, s.as_str()),
        Value::Number(n) => out.insert(prefix, n.to_string()),
        Value::Bool(b) => out.insert(prefix, b.to_string()),
        Value::Tagged(tagged) => flatten_into(prefix, &tagged.value, out),
        Value::Null | Value::Sequence(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DA: &str = r#"
da:
  countries:
    American Samoa: Amerikansk Samoa
    Denmark: Danmark
    "Virgin Islands, U.S.": Amerikanske Jomfruøer
  greeting: Hej
"#;

    #[test]
    fn flattens_nested_keys() {
        let catalog = Catalog::from_yaml_str(DA).unwrap();
        let da = catalog.locale("da").unwrap();
        assert_eq!(da.get("countries.Denmark"), Some("Danmark"));
        assert_eq!(da.get("greeting"), Some("Hej"));
        assert_eq!(
            da.get("countries.Virgin Islands, U.S."),
            Some("Amerikanske Jomfruøer")
        );
        assert_eq!(da.len(), 4);
    }

    #[test]
    fn lookup_reports_missing_key() {
        let catalog = Catalog::from_yaml_str(DA).unwrap();
        let da = catalog.locale("da").unwrap();
        assert_eq!(
            da.lookup("countries.Petoria"),
            Err(MissingTranslation::new("countries.Petoria"))
        );
    }

    #[test]
    fn later_documents_override() {
        let mut catalog = Catalog::from_yaml_str(DA).unwrap();
        catalog
            .merge_yaml_str("da:\n  countries:\n    Denmark: DANMARK\n")
            .unwrap();
        let da = catalog.locale("da").unwrap();
        assert_eq!(da.get("countries.Denmark"), Some("DANMARK"));
        assert_eq!(da.get("countries.American Samoa"), Some("Amerikansk Samoa"));
    }

    #[test]
    fn translator_unavailable_for_unknown_locale() {
        let catalog = Catalog::from_yaml_str(DA).unwrap();
        assert!(catalog.translator("da").is_available());
        assert!(!catalog.translator("sv").is_available());
        assert!(!catalog.translator("not a locale").is_available());
    }

    #[test]
    fn underscore_tags_are_normalised() {
        let catalog =
            Catalog::from_yaml_str("pt_BR:\n  countries:\n    Brazil: Brasil\n").unwrap();
        assert_eq!(catalog.locales().collect::<Vec<_>>(), vec!["pt-BR"]);
        assert!(catalog.locale("pt_BR").is_some());
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!(matches!(
            Catalog::from_yaml_str("- da\n"),
            Err(CountrySelectError::MalformedCatalog(_))
        ));
        assert!(matches!(
            Catalog::from_yaml_str("da: Danish\n"),
            Err(CountrySelectError::MalformedCatalog(_))
        ));
        assert!(matches!(
            Catalog::from_yaml_str("Danish:\n  countries: {}\n"),
            Err(CountrySelectError::InvalidLocale(_))
        ));
    }

    #[test]
    fn strings_collect_from_pairs() {
        let strings: LocaleStrings = [("countries.Denmark", "Danmark")].into_iter().collect();
        assert_eq!(strings.lookup("countries.Denmark").unwrap(), "Danmark");
    }

    #[test]
    fn json_documents_merge_too() {
        let mut catalog = Catalog::new();
        catalog
            .merge_json_str(r#"{"de": {"countries": {"Denmark": "Dänemark"}}}"#)
            .unwrap();
        assert_eq!(
            catalog.locale("de").unwrap().get("countries.Denmark"),
            Some("Dänemark")
        );
    }
}
