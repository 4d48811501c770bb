// SPDX-License-Identifier: PMPL-1.0-or-later

//! Option entries handed to a renderer.

use serde::{Deserialize, Serialize};

/// One `(label, value)` option.
///
/// `value` is always a canonical country name exactly as it was passed in;
/// `label` is its translation, or the same name when none was found.
///
/// Field order matters: the derived `Ord` compares `label` first and breaks
/// ties on `value`, using plain codepoint order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TranslationPair {
    pub label: String,
    pub value: String,
}

impl TranslationPair {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Untranslated pair: the name is its own label.
    pub fn identity(name: &str) -> Self {
        Self::new(name, name)
    }

    pub fn is_translated(&self) -> bool {
        self.label != self.value
    }
}

/// A row of the final `<select>`: a country or the priority divider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectEntry {
    Option(TranslationPair),
    Separator,
}

impl SelectEntry {
    pub fn as_pair(&self) -> Option<&TranslationPair> {
        match self {
            SelectEntry::Option(pair) => Some(pair),
            SelectEntry::Separator => None,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, SelectEntry::Separator)
    }
}

/// Sort pairs the way translated lists are presented.
pub fn sort_pairs(pairs: &mut [TranslationPair]) {
    pairs.sort();
}
