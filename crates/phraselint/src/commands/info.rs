//! Info command implementation

use clap::Args;
use owo_colors::OwoColorize;
use phraselint_core::config::{Config, ConfigSources};
use serde::Serialize;
use tracing::{debug, instrument};

use phraselint_core::phrase::PhraseKind;

use super::load_dictionaries;

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    include_builtin: bool,
    allow_single_word_phrases: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    dictionaries: Vec<String>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            include_builtin: config.include_builtin,
            allow_single_word_phrases: config.allow_single_word_phrases,
            dictionaries: config.dictionaries.iter().map(|p| p.to_string()).collect(),
        }
    }
}

#[derive(Serialize)]
struct DictionaryInfo {
    entries: usize,
    wordy: usize,
    redundant: usize,
    cliche: usize,
    grammar_error: usize,
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
    dictionary: DictionaryInfo,
}

/// Print package information and dictionary statistics
#[instrument(name = "cmd_info", skip_all, fields(json_output = global_json))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let collection = load_dictionaries(config, &[])?;
    let count_kind = |kind: PhraseKind| {
        collection
            .entries()
            .iter()
            .filter(|e| e.phrase().kind() == kind)
            .count()
    };
    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
        dictionary: DictionaryInfo {
            entries: collection.len(),
            wordy: count_kind(PhraseKind::Wordy),
            redundant: count_kind(PhraseKind::Redundant),
            cliche: count_kind(PhraseKind::Cliche),
            grammar_error: count_kind(PhraseKind::GrammarError),
        },
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    println!(
        "{} {}",
        full_info.package.name.bold(),
        full_info.package.version.green()
    );
    if !full_info.package.description.is_empty() {
        println!("{}", full_info.package.description);
    }
    if !full_info.package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), full_info.package.license);
    }
    if !full_info.package.repository.is_empty() {
        println!(
            "{}: {}",
            "Repository".dimmed(),
            full_info.package.repository.cyan()
        );
    }

    println!();
    println!("{}", "Configuration".bold().underline());
    if let Some(ref path) = full_info.config.config_file {
        println!("{}: {}", "Config file".dimmed(), path.cyan());
    } else {
        println!("{}: {}", "Config file".dimmed(), "none loaded".yellow());
    }
    println!("{}: {}", "Log level".dimmed(), full_info.config.log_level);
    println!(
        "{}: {}",
        "Built-in lists".dimmed(),
        full_info.config.include_builtin
    );
    println!(
        "{}: {}",
        "Single-word phrases".dimmed(),
        full_info.config.allow_single_word_phrases
    );
    if !full_info.config.dictionaries.is_empty() {
        println!(
            "{}: {}",
            "Extra dictionaries".dimmed(),
            full_info.config.dictionaries.join(", ")
        );
    }

    println!();
    println!("{}", "Dictionary".bold().underline());
    println!("{}: {}", "Entries".dimmed(), full_info.dictionary.entries);
    println!("{}: {}", "Wordy".dimmed(), full_info.dictionary.wordy);
    println!(
        "{}: {}",
        "Redundant".dimmed(),
        full_info.dictionary.redundant
    );
    println!("{}: {}", "Clichés".dimmed(), full_info.dictionary.cliche);
    println!(
        "{}: {}",
        "Grammar errors".dimmed(),
        full_info.dictionary.grammar_error
    );

    Ok(())
}
