// SPDX-License-Identifier: PMPL-1.0-or-later

//! Configuration file for the `country-select` CLI.
//!
//! ```yaml
//! countries: data/countries.yml
//! locale_files:
//!   - config/locales/da.yml
//! locale: da
//! priority: [Denmark, Sweden]
//! selected: Denmark
//! separator: "----"
//! ```
//!
//! Relative paths are resolved against the directory holding the config file.

use crate::countries::{is_json, CountryTable};
use crate::error::{CountrySelectError, Result};
use crate::i18n::{normalize_locale, Catalog};
use crate::render::Separator;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectConfig {
    pub countries: Option<PathBuf>,
    pub locale_files: Vec<PathBuf>,
    pub locale: Option<String>,
    pub priority: Vec<String>,
    pub selected: Option<String>,
    pub separator: Option<String>,
}

impl SelectConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(source)?;
        config.validated()
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(source)?;
        config.validated()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|e| CountrySelectError::io(path, e))?;
        let config = if is_json(path) {
            Self::from_json_str(&source)?
        } else {
            Self::from_yaml_str(&source)?
        };
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.rebased(base))
    }

    fn validated(mut self) -> Result<Self> {
        if let Some(locale) = &self.locale {
            self.locale = Some(normalize_locale(locale)?);
        }
        Ok(self)
    }

    fn rebased(mut self, base: &Path) -> Self {
        let rebase = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        self.countries = self.countries.map(rebase);
        self.locale_files = self.locale_files.into_iter().map(rebase).collect();
        self
    }

    /// The configured table, or the built-in one.
    pub fn country_table(&self) -> Result<CountryTable> {
        match &self.countries {
            Some(path) => CountryTable::load(path),
            None => Ok(CountryTable::builtin()),
        }
    }

    /// Every configured locale file merged into one catalog.
    pub fn catalog(&self) -> Result<Catalog> {
        let mut catalog = Catalog::new();
        for path in &self.locale_files {
            catalog.load(path)?;
        }
        Ok(catalog)
    }

    pub fn separator(&self) -> Separator {
        self.separator
            .as_deref()
            .map(Separator::new)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(SelectConfig::from_yaml_str("{}").unwrap(), SelectConfig::default());
    }

    #[test]
    fn parses_all_fields() {
        let config = SelectConfig::from_yaml_str(
            "countries: c.yml\nlocale_files: [da.yml]\nlocale: pt_BR\npriority: [Denmark]\nselected: Ireland\nseparator: '--'\n",
        )
        .unwrap();
        assert_eq!(config.countries, Some(PathBuf::from("c.yml")));
        assert_eq!(config.locale.as_deref(), Some("pt-BR"));
        assert_eq!(config.priority, vec!["Denmark"]);
        assert_eq!(config.separator().text(), "--");
    }

    #[test]
    fn rejects_unknown_fields_and_bad_locales() {
        assert!(matches!(
            SelectConfig::from_yaml_str("colour: red\n"),
            Err(CountrySelectError::Yaml(_))
        ));
        assert!(matches!(
            SelectConfig::from_yaml_str("locale: Danish\n"),
            Err(CountrySelectError::InvalidLocale(_))
        ));
    }

    #[test]
    fn load_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("select.yml");
        fs::write(&path, "countries: table.yml\nlocale_files: [/abs/da.yml]\n").unwrap();
        let config = SelectConfig::load(&path).unwrap();
        assert_eq!(config.countries, Some(dir.path().join("table.yml")));
        assert_eq!(config.locale_files, vec![PathBuf::from("/abs/da.yml")]);
    }

    #[test]
    fn default_table_is_builtin() {
        let config = SelectConfig::default();
        assert_eq!(config.country_table().unwrap(), CountryTable::builtin());
        assert!(config.catalog().unwrap().locales().next().is_none());
    }
}
