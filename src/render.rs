// SPDX-License-Identifier: PMPL-1.0-or-later

//! HTML option rendering.
//!
//! The builder only decides *which* pairs go where; turning a group of pairs
//! into markup is the job of an [`OptionRenderer`]. [`HtmlOptionRenderer`]
//! is the stock one and mirrors Rails' `options_for_select`: one `<option>`
//! per line, the selected value marked with `selected="selected"`.

use crate::options::TranslationPair;

/// Text of the default priority divider.
pub const DEFAULT_SEPARATOR_TEXT: &str = "-------------";

pub trait OptionRenderer {
    fn render(&self, pairs: &[TranslationPair], selected: Option<&str>) -> String;
}

impl<F> OptionRenderer for F
where
    F: Fn(&[TranslationPair], Option<&str>) -> String,
{
    fn render(&self, pairs: &[TranslationPair], selected: Option<&str>) -> String {
        self(pairs, selected)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlOptionRenderer;

impl OptionRenderer for HtmlOptionRenderer {
    fn render(&self, pairs: &[TranslationPair], selected: Option<&str>) -> String {
        pairs
            .iter()
            .map(|pair| {
                let marker = if selected == Some(pair.value.as_str()) {
                    " selected=\"selected\""
                } else {
                    ""
                };
                format!(
                    "<option value=\"{}\"{}>{}</option>",
                    escape_html(&pair.value),
                    marker,
                    escape_html(&pair.label)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The disabled, empty-valued option placed between the priority block and
/// the full list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separator {
    text: String,
}

impl Separator {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn to_html(&self) -> String {
        format!(
            "<option value=\"\" disabled=\"disabled\">{}</option>",
            escape_html(&self.text)
        )
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR_TEXT)
    }
}

/// Wrap rendered options in a `<select>` element.
///
/// `id` is derived from `name` the way Rails derives field ids:
/// `user[country]` becomes `user_country`.
pub fn select_element(name: &str, attributes: &[(String, String)], options: &str) -> String {
    let mut open = format!(
        "<select id=\"{}\" name=\"{}\"",
        escape_html(&field_id(name)),
        escape_html(name)
    );
    for (key, value) in attributes {
        open.push_str(&format!(" {}=\"{}\"", escape_html(key), escape_html(value)));
    }
    open.push('>');
    format!("{}{}</select>", open, options)
}

pub fn field_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut pending_underscore = false;
    for c in name.chars() {
        if c == '[' || c == ']' {
            pending_underscore = true;
            continue;
        }
        if pending_underscore && !id.is_empty() {
            id.push('_');
        }
        pending_underscore = false;
        id.push(c);
    }
    id
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
