//! Check command — run the phrase pass over files.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use phraselint_core::checker::{self, PhraseReport};
use phraselint_core::config::Config;
use phraselint_core::phrase::PhraseKind;

use super::{load_dictionaries, read_input_file};

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files to check.
    #[arg(required = true)]
    pub files: Vec<Utf8PathBuf>,

    /// Additional dictionary files (tab-delimited) to load.
    #[arg(long = "dict", value_name = "FILE")]
    pub dicts: Vec<Utf8PathBuf>,

    /// Also consider single-word dictionary phrases.
    #[arg(long)]
    pub allow_single_words: bool,

    /// Exit non-zero when any phrase is found.
    #[arg(long)]
    pub strict: bool,
}

/// One checked file and its report, for `--json` output.
#[derive(Serialize)]
struct FileReport {
    file: Utf8PathBuf,
    #[serde(flatten)]
    report: PhraseReport,
}

/// Check files for dictionary phrases.
#[instrument(name = "cmd_check", skip_all, fields(file_count = args.files.len()))]
pub fn cmd_check(
    args: CheckArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(files = ?args.files, strict = args.strict, "executing check command");

    let dictionary = load_dictionaries(config, &args.dicts)?;
    if dictionary.is_empty() {
        bail!("no dictionary entries loaded (built-ins disabled and no files given)");
    }
    let allow_single = args.allow_single_words || config.allow_single_word_phrases;

    let mut results = Vec::new();
    for file in &args.files {
        let content = read_input_file(file, max_input)?;
        let report = checker::check_phrases(&content, &dictionary, allow_single)
            .with_context(|| format!("failed to check {file}"))?;
        results.push(FileReport {
            file: file.clone(),
            report,
        });
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            print_report(result);
        }
    }

    let total: usize = results.iter().map(|r| r.report.total_issues).sum();
    if args.strict && total > 0 {
        bail!("{total} phrase issue(s) found");
    }

    Ok(())
}

/// Text output for one file.
fn print_report(result: &FileReport) {
    let report = &result.report;
    println!(
        "{}: {} sentences, {} words scanned",
        result.file, report.sentence_count, report.word_count
    );

    if report.issues.is_empty() {
        println!("  {}", "no phrase issues found".green());
        return;
    }

    println!("  {} issue(s):", report.total_issues);
    for issue in &report.issues {
        let kind_label = match issue.kind {
            PhraseKind::Wordy => "WORDY".yellow().to_string(),
            PhraseKind::Redundant => "REDUNDANT".magenta().to_string(),
            PhraseKind::Cliche => "CLICHÉ".cyan().to_string(),
            PhraseKind::GrammarError => "GRAMMAR".red().to_string(),
        };
        match issue.suggestion.as_deref() {
            Some(suggestion) => println!(
                "    [{}] Sentence {}: \"{}\" → \"{}\"",
                kind_label, issue.sentence_num, issue.phrase, suggestion
            ),
            None => println!(
                "    [{}] Sentence {}: \"{}\"",
                kind_label, issue.sentence_num, issue.phrase
            ),
        }
    }
}
