// SPDX-License-Identifier: PMPL-1.0-or-later

//! Errors raised while loading country tables, locale catalogs and config.
//!
//! Rendering itself never fails: a missing translation is handled per entry
//! (see [`crate::i18n::MissingTranslation`]) and never reaches this type.

use std::path::PathBuf;

pub type Result<T, E = CountrySelectError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum CountrySelectError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON")]
    Json(#[from] serde_json::Error),
    #[error("invalid locale tag: {0:?}")]
    InvalidLocale(String),
    #[error("malformed country table: {0}")]
    MalformedTable(String),
    #[error("malformed locale file: {0}")]
    MalformedCatalog(String),
}

impl CountrySelectError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
