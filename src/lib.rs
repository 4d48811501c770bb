// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country-Select — localised country `<select>` option lists.
//!
//! Builds the `(label, value)` option list for a country picker from a
//! master [`countries::CountryTable`], optionally translating each name via a
//! pluggable [`i18n::Translate`] backend and pinning a block of priority
//! countries above a disabled separator.
//!
//! PIECES:
//! 1. **Countries**: the immutable master table (built-in or loaded).
//! 2. **I18n**: lookup-by-key backends; Rails-style YAML locale catalogs.
//! 3. **Builder**: translation, fallback, sorting and priority grouping.
//! 4. **Render**: `<option>`/`<select>` markup behind the `OptionRenderer` seam.
//!
//! ```
//! use country_select::builder::CountryListBuilder;
//! use country_select::countries::CountryTable;
//! use country_select::i18n::Catalog;
//! use country_select::render::HtmlOptionRenderer;
//!
//! let table = CountryTable::new(["Denmark", "Ireland"]);
//! let catalog = Catalog::from_yaml_str("da:\n  countries:\n    Denmark: Danmark\n").unwrap();
//! let html = CountryListBuilder::new(&table)
//!     .with_translator(catalog.translator("da"))
//!     .options_for_select(Some("Ireland"), &["Denmark"], &HtmlOptionRenderer);
//! assert!(html.starts_with("<option value=\"Denmark\">Danmark</option>"));
//! ```

pub mod builder;
pub mod config;
pub mod countries;
pub mod error;
pub mod i18n;
pub mod options;
pub mod output;
pub mod render;

pub use builder::{CountryListBuilder, OptionList};
pub use error::CountrySelectError;
