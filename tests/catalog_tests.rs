// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale files and country tables loaded from disk.

use country_select::config::SelectConfig;
use country_select::countries::CountryTable;
use country_select::i18n::Catalog;
use country_select::render::HtmlOptionRenderer;
use country_select::{CountryListBuilder, CountrySelectError};
use std::fs;
use std::path::Path;

const DA_YML: &str = "\
da:
  countries:
    American Samoa: Amerikansk Samoa
    \"Côte d'Ivoire\": Elfenbenskysten
    Denmark: Danmark
    Holy See (Vatican City State): Den Hellige Stol (Vatikan Staten)
";

const TABLE_YML: &str = "\
countries:
  - American Samoa
  - Côte d'Ivoire
  - Denmark
  - Holy See (Vatican City State)
";

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn rails_locale_file_translates_table() {
    let dir = tempfile::tempdir().unwrap();
    let locale = write(dir.path(), "da.yml", DA_YML);
    let table = CountryTable::load(&write(dir.path(), "countries.yml", TABLE_YML)).unwrap();

    let mut catalog = Catalog::new();
    catalog.load(&locale).unwrap();

    let labels: Vec<String> = CountryListBuilder::new(&table)
        .with_translator(catalog.translator("da"))
        .translated_countries()
        .into_iter()
        .map(|p| p.label)
        .collect();
    assert_eq!(
        labels,
        vec![
            "Amerikansk Samoa",
            "Danmark",
            "Den Hellige Stol (Vatikan Staten)",
            "Elfenbenskysten",
        ]
    );
}

#[test]
fn json_table_and_locale_file() {
    let dir = tempfile::tempdir().unwrap();
    let table = CountryTable::load(&write(
        dir.path(),
        "countries.json",
        r#"["Denmark", "Ireland"]"#,
    ))
    .unwrap();
    let mut catalog = Catalog::new();
    catalog
        .load(&write(
            dir.path(),
            "de.json",
            r#"{"de": {"countries": {"Denmark": "Dänemark", "Ireland": "Irland"}}}"#,
        ))
        .unwrap();

    let html = CountryListBuilder::new(&table)
        .with_translator(catalog.translator("de"))
        .options_for_select(Some("Ireland"), &[], &HtmlOptionRenderer);
    assert_eq!(
        html,
        "<option value=\"Denmark\">Dänemark</option>\n\
         <option value=\"Ireland\" selected=\"selected\">Irland</option>"
    );
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.yml");
    match CountryTable::load(&missing) {
        Err(CountrySelectError::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn unloaded_locale_means_no_sorting() {
    let catalog = Catalog::from_yaml_str(DA_YML).unwrap();
    let table = CountryTable::new(["Denmark", "American Samoa"]);
    let values: Vec<String> = CountryListBuilder::new(&table)
        .with_translator(catalog.translator("sv"))
        .translated_countries()
        .into_iter()
        .map(|p| p.value)
        .collect();
    assert_eq!(values, vec!["Denmark", "American Samoa"]);
}

#[test]
fn config_file_drives_a_full_render() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "da.yml", DA_YML);
    write(dir.path(), "countries.yml", TABLE_YML);
    let config_path = write(
        dir.path(),
        "select.yml",
        "countries: countries.yml\nlocale_files: [da.yml]\nlocale: da\npriority: [Denmark]\nselected: Denmark\nseparator: '---'\n",
    );

    let config = SelectConfig::load(&config_path).unwrap();
    let table = config.country_table().unwrap();
    let catalog = config.catalog().unwrap();
    let locale = config.locale.as_deref().unwrap();
    let priority: Vec<&str> = config.priority.iter().map(String::as_str).collect();

    let html = CountryListBuilder::new(&table)
        .with_translator(catalog.translator(locale))
        .with_separator(config.separator())
        .select_tag(
            "user[country]",
            config.selected.as_deref(),
            &priority,
            &HtmlOptionRenderer,
            &[],
        );

    assert!(html.starts_with(
        "<select id=\"user_country\" name=\"user[country]\">\
         <option value=\"Denmark\" selected=\"selected\">Danmark</option>\n\
         <option value=\"\" disabled=\"disabled\">---</option>\n\
         <option value=\"American Samoa\">Amerikansk Samoa</option>"
    ));
    assert!(html.ends_with(
        "<option value=\"C\u{f4}te d&#39;Ivoire\">Elfenbenskysten</option></select>"
    ));
    assert_eq!(html.matches("selected=\"selected\"").count(), 2);
}
