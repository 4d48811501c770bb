// SPDX-License-Identifier: PMPL-1.0-or-later

//! country-select: render localised country `<select>` option lists
//!
//! Reads a country table and Rails-style locale files, then prints the
//! translated list, the option markup, or a whole `<select>` element.

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use country_select::config::SelectConfig;
use country_select::countries::CountryTable;
use country_select::i18n::{language_name, normalize_locale, Catalog};
use country_select::output::OutputFormat;
use country_select::render::HtmlOptionRenderer;
use country_select::CountryListBuilder;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "country-select")]
#[command(version)]
#[command(about = "Localised country <select> option lists with priority countries")]
#[command(long_about = None)]
struct Cli {
    /// Log translation lookups and fallbacks to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the master country list in configured order
    List {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the translated (label, value) pairs
    Translate {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print <option> markup, priority countries first
    Options {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Print the option groups as data instead of markup
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print a complete <select> element
    Select {
        /// Field name, e.g. `user[country]`
        #[arg(value_name = "NAME")]
        name: String,

        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Extra HTML attribute as KEY=VALUE (repeatable)
        #[arg(long = "attr", value_name = "KEY=VALUE", value_parser = parse_attribute)]
        attributes: Vec<(String, String)>,
    },
}

#[derive(Args, Default)]
struct SourceArgs {
    /// YAML/JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Country table (YAML or JSON list)
    #[arg(long)]
    countries: Option<PathBuf>,

    /// Locale file to load (repeatable)
    #[arg(long = "locale-file")]
    locale_files: Vec<PathBuf>,

    /// Locale to translate into; omit to keep names untranslated
    #[arg(short, long)]
    locale: Option<String>,
}

#[derive(Args, Default)]
struct SelectionArgs {
    /// Pre-selected country value
    #[arg(short, long)]
    selected: Option<String>,

    /// Priority country shown above the separator (repeatable)
    #[arg(short, long)]
    priority: Vec<String>,

    /// Separator text
    #[arg(long)]
    separator: Option<String>,
}

fn parse_attribute(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got {:?}", raw)),
    }
}

/// Config file values overlaid with command-line flags.
fn resolve(source: SourceArgs, selection: SelectionArgs) -> Result<SelectConfig> {
    let mut config = match &source.config {
        Some(path) => SelectConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SelectConfig::default(),
    };
    if source.countries.is_some() {
        config.countries = source.countries;
    }
    config.locale_files.extend(source.locale_files);
    if let Some(locale) = source.locale {
        config.locale = Some(normalize_locale(&locale)?);
    }
    if !selection.priority.is_empty() {
        config.priority = selection.priority;
    }
    if selection.selected.is_some() {
        config.selected = selection.selected;
    }
    if selection.separator.is_some() {
        config.separator = selection.separator;
    }
    Ok(config)
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "country_select=debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::List { source } => {
            let config = resolve(source, SelectionArgs::default())?;
            let table = config.country_table().context("loading country table")?;
            for name in table.iter() {
                println!("{}", name);
            }
        }

        Commands::Translate { source, format } => {
            let config = resolve(source, SelectionArgs::default())?;
            let table = config.country_table().context("loading country table")?;
            let catalog = config.catalog().context("loading locale files")?;
            let builder = builder_for(&config, &table, &catalog)?;
            if format == OutputFormat::Text {
                print_heading(&config);
            }
            println!("{}", format.pairs(&builder.translated_countries())?);
        }

        Commands::Options {
            source,
            selection,
            format,
        } => {
            let config = resolve(source, selection)?;
            let table = config.country_table().context("loading country table")?;
            let catalog = config.catalog().context("loading locale files")?;
            let builder = builder_for(&config, &table, &catalog)?;
            let priority: Vec<&str> = config.priority.iter().map(String::as_str).collect();
            match format {
                Some(format) => {
                    let list = builder.option_pairs(config.selected.as_deref(), &priority);
                    println!("{}", format.option_list(&list, &config.separator())?);
                }
                None => println!(
                    "{}",
                    builder.options_for_select(
                        config.selected.as_deref(),
                        &priority,
                        &HtmlOptionRenderer
                    )
                ),
            }
        }

        Commands::Select {
            name,
            source,
            selection,
            attributes,
        } => {
            let config = resolve(source, selection)?;
            let table = config.country_table().context("loading country table")?;
            let catalog = config.catalog().context("loading locale files")?;
            let builder = builder_for(&config, &table, &catalog)?;
            let priority: Vec<&str> = config.priority.iter().map(String::as_str).collect();
            println!(
                "{}",
                builder.select_tag(
                    &name,
                    config.selected.as_deref(),
                    &priority,
                    &HtmlOptionRenderer,
                    &attributes
                )
            );
        }
    }

    Ok(())
}

fn builder_for<'a>(
    config: &SelectConfig,
    table: &'a CountryTable,
    catalog: &'a Catalog,
) -> Result<CountryListBuilder<'a>> {
    let mut builder = CountryListBuilder::new(table).with_separator(config.separator());
    if let Some(locale) = &config.locale {
        if catalog.locale(locale).is_none() {
            return Err(anyhow!(
                "locale {} not found in any locale file (loaded: {:?})",
                locale,
                catalog.locales().collect::<Vec<_>>()
            ));
        }
        builder = builder.with_translator(catalog.translator(locale));
    }
    Ok(builder)
}

fn print_heading(config: &SelectConfig) {
    let heading = match &config.locale {
        Some(locale) => match language_name(locale) {
            Some(name) => format!("Countries ({}, {})", locale, name),
            None => format!("Countries ({})", locale),
        },
        None => "Countries (untranslated)".to_string(),
    };
    println!("{}", heading.bold().cyan());
}
