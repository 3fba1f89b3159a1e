//! The phrase dictionary: an ordered, searchable set of phrase entries.
//!
//! A [`PhraseCollection`] is populated once from one or more tab-delimited
//! word-list files, sorted, and then queried many times — once per word
//! position of every sentence under analysis. The query path is a binary
//! search (`partition_point`) for the cluster of entries sharing the query's
//! first word, followed by a short linear scan of that cluster that keeps
//! the longest successful match.
//!
//! # Dictionary file format
//!
//! One phrase per row, columns separated by tabs:
//!
//! 1. phrase text, space-delimited words (required; zero-word rows skipped)
//! 2. suggested replacement (optional)
//! 3. numeric classification: 0=wordy, 1=redundant, 2=cliché, 3=grammar error
//! 4. preceding-exception words, `;` or `,` delimited (optional)
//! 5. trailing-exception words, `;` or `,` delimited (optional)

use camino::Utf8Path;

use crate::error::{DictionaryError, DictionaryResult};
use crate::phrase::{MatchOutcome, Phrase, PhraseKind};
use crate::word::Word;

/// One dictionary entry: a phrase and its suggested replacement.
///
/// For search purposes the pair compares by its phrase component only.
#[derive(Debug, Clone)]
pub struct PhraseEntry {
    phrase: Phrase,
    suggestion: String,
}

impl PhraseEntry {
    /// Create an entry.
    pub const fn new(phrase: Phrase, suggestion: String) -> Self {
        Self { phrase, suggestion }
    }

    /// The phrase.
    pub const fn phrase(&self) -> &Phrase {
        &self.phrase
    }

    /// The suggested replacement text (may be empty).
    pub fn suggestion(&self) -> &str {
        &self.suggestion
    }
}

/// An ordered, searchable dictionary of phrases.
///
/// Search operations require the collection to be sorted; loading without
/// `sort_after` leaves it unsorted until [`sort`](Self::sort) or
/// [`remove_duplicates`](Self::remove_duplicates) runs. Debug builds assert
/// the precondition at query time; release builds skip the check.
#[derive(Debug, Clone, Default)]
pub struct PhraseCollection {
    entries: Vec<PhraseEntry>,
    sorted: bool,
}

impl PhraseCollection {
    /// Create an empty collection.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            sorted: true,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the collection holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only view of the entries, in storage order.
    pub fn entries(&self) -> &[PhraseEntry] {
        &self.entries
    }

    /// The entry at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&PhraseEntry> {
        self.entries.get(index)
    }

    /// Load phrases from a tab-delimited buffer.
    ///
    /// Malformed rows (zero parsed words) are skipped; an empty buffer is a
    /// no-op. When `preserve_existing` is `false` the collection is cleared
    /// first. When `sort_after` is `false` the caller is expected to call
    /// [`sort`](Self::sort) (or [`remove_duplicates`](Self::remove_duplicates))
    /// before querying — useful to avoid re-sorting between multiple loads.
    #[tracing::instrument(skip(self, buffer), fields(buffer_len = buffer.len()))]
    pub fn load_str(&mut self, buffer: &str, sort_after: bool, preserve_existing: bool) {
        // An empty buffer must not touch existing entries, so this check
        // comes before the clear.
        if buffer.is_empty() {
            return;
        }
        if !preserve_existing {
            self.entries.clear();
            self.sorted = true;
        }

        let mut loaded = 0usize;
        for line in buffer.lines() {
            let Some(entry) = parse_row(line) else {
                continue;
            };
            self.entries.push(entry);
            loaded += 1;
        }

        if loaded > 0 {
            self.sorted = false;
        }
        if sort_after {
            self.sort();
        }
        tracing::debug!(loaded, total = self.entries.len(), "phrases loaded");
    }

    /// Load phrases from a file, with [`load_str`](Self::load_str) semantics.
    pub fn load_file(
        &mut self,
        path: &Utf8Path,
        sort_after: bool,
        preserve_existing: bool,
    ) -> DictionaryResult<()> {
        let buffer =
            std::fs::read_to_string(path.as_std_path()).map_err(|source| DictionaryError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        self.load_str(&buffer, sort_after, preserve_existing);
        Ok(())
    }

    /// Sort entries ascending by phrase order.
    pub fn sort(&mut self) {
        self.entries.sort_by(|a, b| a.phrase.cmp(&b.phrase));
        self.sorted = true;
    }

    /// Sort, then drop adjacent entries with equal word sequences.
    ///
    /// Among duplicates the entry sorting first wins and keeps its metadata;
    /// the rest are discarded silently. Idempotent.
    pub fn remove_duplicates(&mut self) {
        self.sort();
        self.entries.dedup_by(|b, a| a.phrase == b.phrase);
    }

    /// Find the best (longest) phrase matching the sentence at `position`.
    ///
    /// `max_word_count` is the number of words available from `position` to
    /// the end of the sentence. Single-word dictionary phrases are only
    /// considered when `allow_single_words` is set; with it off a two-word
    /// search key narrows the binary search landing point considerably.
    ///
    /// Returns the entry index of the match, or `None`. Requires a sorted
    /// collection.
    pub fn find_best_match(
        &self,
        sentence: &[Word],
        position: usize,
        max_word_count: usize,
        allow_single_words: bool,
    ) -> Option<usize> {
        debug_assert!(self.sorted, "find_best_match called on unsorted collection");

        let remaining = max_word_count.min(sentence.len().saturating_sub(position));
        if remaining == 0 || (!allow_single_words && remaining < 2) {
            return None;
        }
        let first = &sentence[position];

        // Transient search key: two words unless single-word phrases are in
        // play, in which case the whole first-word cluster must be scanned.
        let key: &[Word] = if allow_single_words {
            &sentence[position..=position]
        } else {
            &sentence[position..position + 2]
        };
        let start = self.entries.partition_point(|e| e.phrase.words() < key);

        let mut best = None;
        for (index, entry) in self.entries.iter().enumerate().skip(start) {
            // All candidates share the query's first word; the cluster ends
            // where that stops being true.
            if entry.phrase.first_word() != Some(first) {
                break;
            }
            if !allow_single_words && entry.phrase.words().len() < 2 {
                continue;
            }
            match entry.phrase.matches_at(sentence, position, remaining) {
                // Keep scanning: a longer phrase later in the cluster wins.
                MatchOutcome::Equal => best = Some(index),
                // Sorted order guarantees nothing further can match.
                MatchOutcome::GreaterThan => break,
                // A veto or short mismatch for one phrase says nothing about
                // its siblings.
                MatchOutcome::LessThan
                | MatchOutcome::LongerThan
                | MatchOutcome::RuleException => {}
            }
        }
        best
    }

    /// Serialize to the tab-delimited dictionary format.
    ///
    /// Rows are CRLF-terminated. Trailing columns carrying only default
    /// values (empty suggestion, classification `0`, empty exception lists)
    /// are omitted; the loader supplies the same defaults for absent
    /// columns, so reloading the output yields an equal set of entries.
    pub fn to_tab_delimited(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            let mut columns = vec![
                entry.suggestion.clone(),
                entry.phrase.kind().as_code().to_string(),
                join_words(entry.phrase.preceding_exceptions()),
                join_words(entry.phrase.trailing_exceptions()),
            ];
            while columns.last().is_some_and(|c| c.is_empty()) {
                columns.pop();
            }
            // The classification column is only reachable from the end once
            // both exception columns are gone.
            if columns.len() == 2 && columns[1] == "0" {
                columns.pop();
                if columns[0].is_empty() {
                    columns.pop();
                }
            }

            out.push_str(&entry.phrase.to_text());
            for column in &columns {
                out.push('\t');
                out.push_str(column);
            }
            out.push_str("\r\n");
        }
        out
    }
}

/// Parse one dictionary row. `None` for rows with no phrase words.
fn parse_row(line: &str) -> Option<PhraseEntry> {
    let mut columns = line.trim_end_matches('\r').split('\t');

    let phrase = Phrase::parse(columns.next()?)?;
    let suggestion = columns.next().unwrap_or("").trim().to_string();
    let kind = columns.next().map_or(PhraseKind::Wordy, PhraseKind::from_code);
    let preceding = columns.next().map(parse_exception_words).unwrap_or_default();
    let trailing = columns.next().map(parse_exception_words).unwrap_or_default();

    let phrase = phrase
        .with_kind(kind)
        .with_preceding_exceptions(preceding)
        .with_trailing_exceptions(trailing);
    Some(PhraseEntry::new(phrase, suggestion))
}

/// Split an exception column on `;` or `,`.
fn parse_exception_words(column: &str) -> Vec<Word> {
    column
        .split([';', ','])
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(Word::new)
        .collect()
}

fn join_words(words: &[Word]) -> String {
    words
        .iter()
        .map(Word::as_str)
        .collect::<Vec<_>>()
        .join(";")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(text: &str) -> Vec<Word> {
        text.split_whitespace().map(Word::new).collect()
    }

    fn loaded(buffer: &str) -> PhraseCollection {
        let mut collection = PhraseCollection::new();
        collection.load_str(buffer, true, false);
        collection
    }

    #[test]
    fn empty_buffer_is_a_no_op() {
        let mut collection = PhraseCollection::new();
        collection.load_str("", true, false);
        assert!(collection.is_empty());

        // Even without preserve_existing, loaded entries survive.
        collection.load_str("in order to\tto\n", true, false);
        collection.load_str("", true, false);
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let collection = loaded("in order to\tto\n   \t\t\n\nvery unique\tunique\t1\n");
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn load_parses_all_columns() {
        let collection = loaded("could of\tcould have\t3\tyou;we\tcourse, naturally\n");
        let entry = collection.get(0).unwrap();
        assert_eq!(entry.phrase().to_text(), "could of");
        assert_eq!(entry.suggestion(), "could have");
        assert_eq!(entry.phrase().kind(), PhraseKind::GrammarError);
        assert_eq!(entry.phrase().preceding_exceptions().len(), 2);
        assert_eq!(entry.phrase().trailing_exceptions().len(), 2);
    }

    #[test]
    fn preserve_existing_appends() {
        let mut collection = loaded("in order to\tto\n");
        collection.load_str("very unique\tunique\t1\n", true, true);
        assert_eq!(collection.len(), 2);

        collection.load_str("at this time\tnow\n", true, false);
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn remove_duplicates_keeps_first_and_is_idempotent() {
        let mut collection = loaded("very unique\tunique\t1\nvery unique\t\t2\n");
        collection.remove_duplicates();
        assert_eq!(collection.len(), 1);
        // The row sorting first wins; load order is stable under sort_by.
        assert_eq!(collection.get(0).unwrap().suggestion(), "unique");

        collection.remove_duplicates();
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn finds_a_simple_match() {
        let collection = loaded("for the purpose of\tto\nin order to\tto\n");
        let text = sentence("he wrote it for the purpose of clarity");
        let index = collection.find_best_match(&text, 3, 5, false).unwrap();
        assert_eq!(
            collection.get(index).unwrap().phrase().to_text(),
            "for the purpose of"
        );
    }

    #[test]
    fn no_match_returns_none() {
        let collection = loaded("for the purpose of\tto\n");
        let text = sentence("he wrote it for the purpose of clarity");
        assert!(collection.find_best_match(&text, 1, 7, false).is_none());
    }

    #[test]
    fn longest_match_wins() {
        let collection = loaded("in order\t\nin order to\tto\nin other words\t\n");
        let text = sentence("in order to succeed");
        let index = collection.find_best_match(&text, 0, 4, false).unwrap();
        assert_eq!(collection.get(index).unwrap().phrase().to_text(), "in order to");
    }

    #[test]
    fn rule_exception_does_not_stop_the_cluster_scan() {
        // The vetoed two-word phrase sorts before the three-word one that
        // should still be found.
        let collection = loaded("could of\tcould have\t3\t\tcourse\ncould of course go\t\t3\n");
        let text = sentence("could of course go home");
        let index = collection.find_best_match(&text, 0, 5, false).unwrap();
        assert_eq!(
            collection.get(index).unwrap().phrase().to_text(),
            "could of course go"
        );
    }

    #[test]
    fn single_word_phrases_need_opt_in() {
        let collection = loaded("irregardless\tregardless\t3\n");
        let text = sentence("irregardless of that");
        assert!(collection.find_best_match(&text, 0, 3, false).is_none());
        assert!(collection.find_best_match(&text, 0, 3, true).is_some());
    }

    #[test]
    fn last_word_of_sentence_cannot_start_a_multiword_match() {
        let collection = loaded("in order to\tto\n");
        let text = sentence("everything is in");
        assert!(collection.find_best_match(&text, 2, 1, false).is_none());
    }

    #[test]
    fn serialization_round_trips() {
        let source = "could of\tcould have\t3\t\tcourse\nin order to\tto\nvery unique\tunique\t1\n";
        let original = loaded(source);

        let mut reloaded = PhraseCollection::new();
        reloaded.load_str(&original.to_tab_delimited(), true, false);

        assert_eq!(original.len(), reloaded.len());
        for (a, b) in original.entries().iter().zip(reloaded.entries()) {
            assert_eq!(a.phrase(), b.phrase());
            assert_eq!(a.phrase().kind(), b.phrase().kind());
            assert_eq!(a.suggestion(), b.suggestion());
            assert_eq!(a.phrase().trailing_exceptions(), b.phrase().trailing_exceptions());
        }
    }

    #[test]
    fn serialization_omits_trailing_default_columns() {
        // Classification 0 after the suggestion carries no information.
        let collection = loaded("in order to\tto\n");
        assert_eq!(collection.to_tab_delimited(), "in order to\tto\r\n");

        // A bare phrase row serializes back to just the phrase.
        let collection = loaded("basic fundamentals\n");
        assert_eq!(collection.to_tab_delimited(), "basic fundamentals\r\n");

        // A non-default classification keeps its (empty) suggestion column.
        let collection = loaded("piece of cake\t\t2\n");
        assert_eq!(collection.to_tab_delimited(), "piece of cake\t\t2\r\n");

        // Exception columns keep everything before them in place.
        let collection = loaded("i are\ti am\t3\tand;or\n");
        assert_eq!(collection.to_tab_delimited(), "i are\ti am\t3\tand;or\r\n");
    }
}
