// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization of option lists for CLI output.

use crate::builder::OptionList;
use crate::error::Result;
use crate::options::{SelectEntry, TranslationPair};
use crate::render::Separator;
use clap::ValueEnum;
use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn pairs(&self, pairs: &[TranslationPair]) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(pairs.iter().map(text_line).collect::<Vec<_>>().join("\n")),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(pairs)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(pairs)?),
        }
    }

    pub fn option_list(&self, list: &OptionList, separator: &Separator) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(list
                .entries()
                .iter()
                .map(|entry| match entry {
                    SelectEntry::Option(pair) => text_line(pair),
                    SelectEntry::Separator => separator.text().dimmed().to_string(),
                })
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(list)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(list)?),
        }
    }
}

fn text_line(pair: &TranslationPair) -> String {
    if pair.is_translated() {
        format!("{}  {}", pair.label.bold(), format!("({})", pair.value).dimmed())
    } else {
        pair.label.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_pairs() {
        let pairs = vec![TranslationPair::new("Danmark", "Denmark")];
        let json = OutputFormat::Json.pairs(&pairs).unwrap();
        let back: Vec<TranslationPair> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pairs);
    }

    #[test]
    fn text_list_uses_configured_separator() {
        colored::control::set_override(false);
        let list = OptionList {
            priority: vec![TranslationPair::new("Danmark", "Denmark")],
            main: vec![TranslationPair::identity("Ireland")],
            selected: None,
        };
        assert_eq!(
            OutputFormat::Text
                .option_list(&list, &Separator::new("=="))
                .unwrap(),
            "Danmark  (Denmark)\n==\nIreland"
        );
    }

    #[test]
    fn text_untranslated_is_plain() {
        colored::control::set_override(false);
        let pairs = vec![
            TranslationPair::identity("Ireland"),
            TranslationPair::new("Danmark", "Denmark"),
        ];
        assert_eq!(
            OutputFormat::Text.pairs(&pairs).unwrap(),
            "Ireland\nDanmark  (Denmark)"
        );
    }
}
