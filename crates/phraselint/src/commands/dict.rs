//! Dict command — dictionary merge, dedup, and export tooling.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Args, Subcommand};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use phraselint_core::PhraseCollection;
use phraselint_core::config::Config;

/// Arguments for the `dict` subcommand.
#[derive(Args, Debug)]
pub struct DictArgs {
    /// The dictionary operation to run.
    #[command(subcommand)]
    pub command: DictCommand,
}

/// Dictionary operations.
#[derive(Subcommand, Debug)]
pub enum DictCommand {
    /// Merge dictionary files, dropping duplicate phrases, and export
    /// the result in the tab-delimited format
    Merge(MergeArgs),
}

/// Arguments for `dict merge`.
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Dictionary files to merge, in precedence order (first wins on
    /// duplicate phrases that sort equal).
    #[arg(required = true)]
    pub files: Vec<Utf8PathBuf>,

    /// Write the merged dictionary here instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,

    /// Include the built-in word lists in the merge.
    #[arg(long)]
    pub include_builtin: bool,
}

#[derive(Serialize)]
struct MergeSummary {
    entries: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<Utf8PathBuf>,
}

/// Run a dictionary operation.
#[instrument(name = "cmd_dict", skip_all)]
pub fn cmd_dict(args: DictArgs, global_json: bool, _config: &Config) -> anyhow::Result<()> {
    match args.command {
        DictCommand::Merge(merge) => cmd_merge(merge, global_json),
    }
}

fn cmd_merge(args: MergeArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(files = ?args.files, include_builtin = args.include_builtin, "merging dictionaries");

    let mut collection = if args.include_builtin {
        phraselint_core::word_lists::builtin_collection()
    } else {
        PhraseCollection::new()
    };
    for path in &args.files {
        collection
            .load_file(path, false, true)
            .with_context(|| format!("failed to load dictionary {path}"))?;
    }
    collection.remove_duplicates();

    let serialized = collection.to_tab_delimited();
    if let Some(ref output) = args.output {
        std::fs::write(output.as_std_path(), &serialized)
            .with_context(|| format!("failed to write {output}"))?;
        let summary = MergeSummary {
            entries: collection.len(),
            output: Some(output.clone()),
        };
        if global_json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            println!(
                "{} entries written to {}",
                collection.len().to_string().bold(),
                output.cyan()
            );
        }
    } else {
        // Export to stdout; keep it clean for piping.
        print!("{serialized}");
    }

    Ok(())
}
