// SPDX-License-Identifier: PMPL-1.0-or-later

//! Assembly of translated, sorted country option lists.
//!
//! ## Ordering rules
//!
//! - With no translation backend every country keeps its own name as label
//!   and the table's order is kept verbatim. Nothing is sorted.
//! - With a backend, each country is looked up once, in input order, under
//!   `countries.<name>`. A [`MissingTranslation`](crate::i18n::MissingTranslation)
//!   only affects that entry, which keeps its own name. The finished list is
//!   sorted by label (codepoint order, ties on value).
//!
//! Priority countries are translated and sorted independently of the main
//! list and are not removed from it; they appear in both places.

use crate::countries::CountryTable;
use crate::i18n::{country_key, Translator};
use crate::options::{sort_pairs, SelectEntry, TranslationPair};
use crate::render::{select_element, OptionRenderer, Separator};
use serde::Serialize;

/// Borrowed view over a country table plus an optional translation backend.
///
/// Cheap to build; create one per render.
#[derive(Debug, Clone)]
pub struct CountryListBuilder<'a> {
    countries: &'a CountryTable,
    translator: Translator<'a>,
    separator: Separator,
}

impl<'a> CountryListBuilder<'a> {
    pub fn new(countries: &'a CountryTable) -> Self {
        Self {
            countries,
            translator: Translator::Unavailable,
            separator: Separator::default(),
        }
    }

    pub fn with_translator(mut self, translator: Translator<'a>) -> Self {
        self.translator = translator;
        self
    }

    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    /// The master list, untouched.
    pub fn countries(&self) -> &'a [String] {
        self.countries.names()
    }

    pub fn translator(&self) -> Translator<'a> {
        self.translator
    }

    /// Translate `countries` into `(label, value)` pairs.
    pub fn translate<S: AsRef<str>>(&self, countries: &[S]) -> Vec<TranslationPair> {
        let backend = match self.translator {
            Translator::Unavailable => {
                return countries
                    .iter()
                    .map(|name| TranslationPair::identity(name.as_ref()))
                    .collect();
            }
            Translator::Available(backend) => backend,
        };

        let mut pairs: Vec<TranslationPair> = countries
            .iter()
            .map(|name| {
                let name = name.as_ref();
                let key = country_key(name);
                tracing::trace!(%key, "looking up country label");
                match backend.lookup(&key) {
                    Ok(label) => TranslationPair::new(label, name),
                    Err(missing) => {
                        tracing::debug!(country = name, key = %missing.key, "no translation, using name");
                        TranslationPair::identity(name)
                    }
                }
            })
            .collect();
        sort_pairs(&mut pairs);
        pairs
    }

    /// [`translate`](Self::translate) applied to the whole table.
    pub fn translated_countries(&self) -> Vec<TranslationPair> {
        self.translate(self.countries())
    }

    /// Build the option groups for a `<select>`.
    ///
    /// `selected` is carried through untouched; it is not checked against
    /// the table. An empty `priority` slice means no priority block.
    pub fn option_pairs(&self, selected: Option<&str>, priority: &[&str]) -> OptionList {
        let main = self.translated_countries();
        let priority = if priority.is_empty() {
            Vec::new()
        } else {
            self.translate(priority)
        };
        tracing::debug!(
            countries = main.len(),
            priority = priority.len(),
            selected = ?selected,
            "built country option list"
        );
        OptionList {
            priority,
            main,
            selected: selected.map(str::to_owned),
        }
    }

    /// Rendered `<option>` markup for the table, priority block first.
    pub fn options_for_select<R>(
        &self,
        selected: Option<&str>,
        priority: &[&str],
        renderer: &R,
    ) -> String
    where
        R: OptionRenderer + ?Sized,
    {
        self.option_pairs(selected, priority)
            .render(renderer, &self.separator)
    }

    /// A complete `<select name=".." id="..">` element.
    pub fn select_tag<R>(
        &self,
        name: &str,
        selected: Option<&str>,
        priority: &[&str],
        renderer: &R,
        attributes: &[(String, String)],
    ) -> String
    where
        R: OptionRenderer + ?Sized,
    {
        let options = self.options_for_select(selected, priority, renderer);
        select_element(name, attributes, &options)
    }
}

/// Option groups produced by [`CountryListBuilder::option_pairs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionList {
    pub priority: Vec<TranslationPair>,
    pub main: Vec<TranslationPair>,
    pub selected: Option<String>,
}

impl OptionList {
    pub fn has_priority(&self) -> bool {
        !self.priority.is_empty()
    }

    /// Flattened rows: priority pairs, a separator, then the main list.
    pub fn entries(&self) -> Vec<SelectEntry> {
        let mut entries = Vec::with_capacity(self.priority.len() + self.main.len() + 1);
        if self.has_priority() {
            entries.extend(self.priority.iter().cloned().map(SelectEntry::Option));
            entries.push(SelectEntry::Separator);
        }
        entries.extend(self.main.iter().cloned().map(SelectEntry::Option));
        entries
    }

    /// Render each group with its own renderer call and join the markup.
    pub fn render<R>(&self, renderer: &R, separator: &Separator) -> String
    where
        R: OptionRenderer + ?Sized,
    {
        let selected = self.selected.as_deref();
        let mut html = String::new();
        if self.has_priority() {
            html.push_str(&renderer.render(&self.priority, selected));
            html.push('\n');
            html.push_str(&separator.to_html());
            html.push('\n');
        }
        html.push_str(&renderer.render(&self.main, selected));
        html
    }
}
