//! Phrase entities and the word-window match contract.
//!
//! A [`Phrase`] is one multi-word lexical pattern (a wordy expression,
//! redundancy, cliché, or grammar error) plus optional contextual exception
//! words that veto an otherwise-successful match. Phrases carry a total
//! lexicographic order so a dictionary of them can be sorted and binary
//! searched, with all phrases sharing a first word clustering together.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::word::Word;

/// Classification of a dictionary phrase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PhraseKind {
    /// Wordy expression with a tighter replacement ("in order to" → "to").
    #[default]
    Wordy,
    /// Redundant pairing ("very unique").
    Redundant,
    /// Worn-out stock phrase ("at the end of the day").
    Cliche,
    /// Outright grammatical error ("could of").
    GrammarError,
}

impl PhraseKind {
    /// Parse the numeric classification code used in dictionary files.
    ///
    /// Unrecognized or absent codes fall back to [`PhraseKind::Wordy`].
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "1" => Self::Redundant,
            "2" => Self::Cliche,
            "3" => Self::GrammarError,
            _ => Self::Wordy,
        }
    }

    /// The numeric classification code used in dictionary files.
    pub const fn as_code(self) -> u8 {
        match self {
            Self::Wordy => 0,
            Self::Redundant => 1,
            Self::Cliche => 2,
            Self::GrammarError => 3,
        }
    }

    /// Human-readable label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wordy => "wordy",
            Self::Redundant => "redundant",
            Self::Cliche => "cliché",
            Self::GrammarError => "grammar error",
        }
    }
}

impl std::fmt::Display for PhraseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of testing a phrase against a window of live text.
///
/// Only [`Equal`](Self::Equal) is a match. The no-match variants are
/// distinguished so the clustered dictionary scan can make correct
/// stop/continue decisions without re-deriving the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Every phrase word matched the window, and no exception fired.
    Equal,
    /// First mismatching phrase word sorted before the text word; later
    /// dictionary entries may still match.
    LessThan,
    /// First mismatching phrase word sorted after the text word; no later
    /// entry in the same sorted cluster can match.
    GreaterThan,
    /// The phrase has more words than remain in the sentence.
    LongerThan,
    /// The words matched, but a preceding or trailing exception vetoed it.
    RuleException,
}

/// One lexical pattern: an ordered word sequence plus classification and
/// contextual exception sets.
///
/// Equality and ordering consider the word sequence only; classification
/// and exceptions are metadata. Two dictionary rows with the same literal
/// phrase are therefore duplicates even when their metadata differs.
#[derive(Debug, Clone)]
pub struct Phrase {
    words: Vec<Word>,
    kind: PhraseKind,
    /// Sorted, deduplicated. Membership via binary search.
    preceding_exceptions: Vec<Word>,
    /// Sorted, deduplicated. Membership via binary search.
    trailing_exceptions: Vec<Word>,
}

impl Phrase {
    /// Create a phrase from its word sequence.
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            words,
            kind: PhraseKind::default(),
            preceding_exceptions: Vec::new(),
            trailing_exceptions: Vec::new(),
        }
    }

    /// Parse a phrase from space-delimited text (consecutive spaces collapse).
    ///
    /// Returns `None` if the text contains no words.
    pub fn parse(text: &str) -> Option<Self> {
        let words: Vec<Word> = text.split_whitespace().map(Word::new).collect();
        if words.is_empty() {
            None
        } else {
            Some(Self::new(words))
        }
    }

    /// Set the classification.
    pub const fn with_kind(mut self, kind: PhraseKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the preceding-exception words (deduplicated, order-irrelevant).
    pub fn with_preceding_exceptions<I>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        self.preceding_exceptions = normalize_exception_set(words);
        self
    }

    /// Set the trailing-exception words (deduplicated, order-irrelevant).
    pub fn with_trailing_exceptions<I>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        self.trailing_exceptions = normalize_exception_set(words);
        self
    }

    /// The word sequence.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The first word, if any. Sorted dictionaries cluster by this.
    pub fn first_word(&self) -> Option<&Word> {
        self.words.first()
    }

    /// The classification.
    pub const fn kind(&self) -> PhraseKind {
        self.kind
    }

    /// Preceding-exception words, sorted.
    pub fn preceding_exceptions(&self) -> &[Word] {
        &self.preceding_exceptions
    }

    /// Trailing-exception words, sorted.
    pub fn trailing_exceptions(&self) -> &[Word] {
        &self.trailing_exceptions
    }

    /// The phrase as space-joined text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(word.as_str());
        }
        out
    }

    /// Test whether this phrase matches the start of the word window at
    /// `position` in `sentence`.
    ///
    /// `max_word_count` is the number of words available from `position` to
    /// the end of the sentence; a phrase longer than that can never match.
    /// A `position` of zero means the window starts the sentence, which
    /// disables the preceding-exception check. Pure; no side effects.
    pub fn matches_at(
        &self,
        sentence: &[Word],
        position: usize,
        max_word_count: usize,
    ) -> MatchOutcome {
        let window = &sentence[position.min(sentence.len())..];
        let remaining = max_word_count.min(window.len());

        if self.words.len() > remaining {
            return MatchOutcome::LongerThan;
        }

        for (ours, live) in self.words.iter().zip(window) {
            match ours.cmp(live) {
                Ordering::Less => return MatchOutcome::LessThan,
                Ordering::Greater => return MatchOutcome::GreaterThan,
                Ordering::Equal => {}
            }
        }

        // Full word-by-word match; apply contextual vetoes.
        if position > 0
            && self
                .preceding_exceptions
                .binary_search(&sentence[position - 1])
                .is_ok()
        {
            return MatchOutcome::RuleException;
        }

        if self.words.len() < remaining
            && self
                .trailing_exceptions
                .binary_search(&window[self.words.len()])
                .is_ok()
        {
            return MatchOutcome::RuleException;
        }

        MatchOutcome::Equal
    }
}

impl PartialEq for Phrase {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl Eq for Phrase {}

impl PartialOrd for Phrase {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Phrase {
    /// Word-by-word lexicographic order; a strict prefix sorts before its
    /// extension. This clusters phrases sharing a common prefix, which the
    /// dictionary search relies on.
    fn cmp(&self, other: &Self) -> Ordering {
        self.words.cmp(&other.words)
    }
}

/// Sort and deduplicate an exception word list (set semantics over a flat
/// vector; exception lists are tiny in practice).
fn normalize_exception_set<I>(words: I) -> Vec<Word>
where
    I: IntoIterator<Item = Word>,
{
    let mut set: Vec<Word> = words.into_iter().filter(|w| !w.is_empty()).collect();
    set.sort_unstable();
    set.dedup();
    set
}
