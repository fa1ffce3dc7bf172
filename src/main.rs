// SPDX-License-Identifier: PMPL-1.0-or-later

//! po-lingo: translate strings, inspect catalogs and test locale negotiation
//! against a directory of gettext `.po` files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use po_lingo::config::{EngineConfig, LabelStyle};
use po_lingo::i18n::{system_locale_signal, TranslationEngine};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "po-lingo")]
#[command(version)]
#[command(about = "Runtime string translation backed by gettext .po catalogs")]
#[command(long_about = None)]
struct Cli {
    /// Engine config file (.json, .yaml or .yml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Catalog directory (overrides the config file)
    #[arg(short, long, global = true)]
    dir: Option<PathBuf>,

    /// Log catalog loading and locale decisions
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate strings into the selected locale
    Translate {
        /// Locale code (default: config, then system locale)
        #[arg(short, long, conflicts_with = "accept_language")]
        locale: Option<String>,

        /// Pick the locale from an Accept-Language header value
        #[arg(short, long)]
        accept_language: Option<String>,

        /// Strings to translate
        #[arg(value_name = "TEXT", required = true)]
        text: Vec<String>,
    },

    /// List the catalogs available in the directory
    Available {
        /// Show language names in their own script
        #[arg(short, long)]
        native: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show which locale an Accept-Language header selects
    Negotiate {
        #[arg(value_name = "HEADER")]
        header: String,
    },

    /// Print the parsed catalog for a locale
    Dump {
        #[arg(short, long)]
        locale: Option<String>,

        /// Print JSON instead of a listing
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "po_lingo=debug" } else { "po_lingo=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::new(cli.dir.clone().unwrap_or_else(|| PathBuf::from("lang"))),
    };
    if let Some(dir) = &cli.dir {
        config.directory = dir.clone();
    }
    if config.system_locale.is_none() {
        config.system_locale = system_locale_signal();
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = resolve_config(&cli)?;

    match cli.command {
        Commands::Translate {
            locale,
            accept_language,
            text,
        } => {
            if locale.is_some() {
                config.locale = locale;
            }
            let mut engine = open_engine(&config)?;
            if let Some(header) = accept_language {
                engine.set_locale_from_request_header(Some(&header));
            }
            for original in &text {
                println!("{}", engine.translate(original));
            }
        }

        Commands::Available { native, json } => {
            let style = if native {
                LabelStyle::Native
            } else {
                config.labels
            };
            let engine = open_engine(&config)?;
            let languages = engine
                .available(style.lookup())
                .with_context(|| format!("listing {}", engine.directory().display()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&languages)?);
            } else if languages.is_empty() {
                println!("No catalogs found in {}", engine.directory().display());
            } else {
                println!("{}", "AVAILABLE LANGUAGES".bold().cyan());
                for (label, code) in &languages {
                    println!("  {:10} {}", code.yellow(), label);
                }
            }
        }

        Commands::Negotiate { header } => {
            let mut engine = open_engine(&config)?;
            engine.set_locale_from_request_header(Some(&header));
            let locale = engine.locale().to_string();
            let status = if engine.has_catalog(&locale) {
                "catalog found".green()
            } else {
                "no catalog, originals served".yellow()
            };
            println!("{} ({})", locale.bold(), status);
        }

        Commands::Dump { locale, json } => {
            if locale.is_some() {
                config.locale = locale;
            }
            let mut engine = open_engine(&config)?;
            let locale = engine.locale().to_string();
            let entries: BTreeMap<&str, &str> = engine
                .catalog()
                .map(|catalog| catalog.iter().collect())
                .unwrap_or_default();

            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                println!(
                    "{} {} ({} entries)",
                    "CATALOG".bold().cyan(),
                    locale.bold(),
                    entries.len()
                );
                for (original, translation) in &entries {
                    let shown = if translation.is_empty() {
                        "(untranslated)".dimmed().to_string()
                    } else {
                        format!("{:?}", translation)
                    };
                    println!("  {:?} -> {}", original, shown);
                }
            }
        }
    }

    Ok(())
}

fn open_engine(config: &EngineConfig) -> Result<TranslationEngine> {
    config
        .build_engine()
        .with_context(|| format!("opening catalogs in {}", config.directory.display()))
}
