//! The phrase-checking pass.
//!
//! Consumes the dictionary matcher: every word position of every sentence is
//! offered to [`PhraseCollection::find_best_match`], and hits become
//! [`PhraseIssue`] records. After a hit, scanning resumes past the matched
//! span so overlapping findings are not reported twice.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::collection::PhraseCollection;
use crate::error::{AnalysisError, AnalysisResult};
use crate::phrase::PhraseKind;
use crate::text;

/// A detected phrase occurrence.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PhraseIssue {
    /// The dictionary phrase that matched.
    pub phrase: String,
    /// Suggested replacement, when the dictionary offers one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Classification of the matched phrase.
    pub kind: PhraseKind,
    /// The sentence number (1-indexed) where the phrase was found.
    pub sentence_num: usize,
    /// Zero-based word offset of the match within its sentence.
    pub word_index: usize,
}

/// Result of running the phrase pass over a text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PhraseReport {
    /// Number of sentences scanned.
    pub sentence_count: usize,
    /// Number of words scanned.
    pub word_count: usize,
    /// Total findings.
    pub total_issues: usize,
    /// Findings classified as wordy.
    pub wordy_count: usize,
    /// Findings classified as redundant.
    pub redundant_count: usize,
    /// Findings classified as clichés.
    pub cliche_count: usize,
    /// Findings classified as grammar errors.
    pub grammar_error_count: usize,
    /// All findings, in document order.
    pub issues: Vec<PhraseIssue>,
}

/// Scan text for dictionary phrases.
///
/// The collection must already be sorted (it is, coming out of
/// [`remove_duplicates`](PhraseCollection::remove_duplicates) or a
/// `sort_after` load).
///
/// # Errors
///
/// [`AnalysisError::EmptyInput`] when the text contains no sentences.
#[tracing::instrument(skip(text, dictionary), fields(text_len = text.len(), dict_len = dictionary.len()))]
pub fn check_phrases(
    text: &str,
    dictionary: &PhraseCollection,
    allow_single_words: bool,
) -> AnalysisResult<PhraseReport> {
    let sentences = text::split_sentences(text);
    if sentences.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let mut issues = Vec::new();
    let mut word_count = 0;

    for (idx, sentence) in sentences.iter().enumerate() {
        let words = text::tokenize(sentence);
        word_count += words.len();

        let mut position = 0;
        while position < words.len() {
            let remaining = words.len() - position;
            let Some(found) =
                dictionary.find_best_match(&words, position, remaining, allow_single_words)
            else {
                position += 1;
                continue;
            };

            // find_best_match only returns indices it handed out.
            let entry = dictionary.get(found).expect("match index in range");
            issues.push(PhraseIssue {
                phrase: entry.phrase().to_text(),
                suggestion: if entry.suggestion().is_empty() {
                    None
                } else {
                    Some(entry.suggestion().to_string())
                },
                kind: entry.phrase().kind(),
                sentence_num: idx + 1,
                word_index: position,
            });
            position += entry.phrase().words().len();
        }
    }

    let count_kind = |kind: PhraseKind| issues.iter().filter(|i| i.kind == kind).count();
    let report = PhraseReport {
        sentence_count: sentences.len(),
        word_count,
        total_issues: issues.len(),
        wordy_count: count_kind(PhraseKind::Wordy),
        redundant_count: count_kind(PhraseKind::Redundant),
        cliche_count: count_kind(PhraseKind::Cliche),
        grammar_error_count: count_kind(PhraseKind::GrammarError),
        issues,
    };
    tracing::debug!(total = report.total_issues, "phrase pass complete");
    Ok(report)
}
