//! Sentence segmentation and tokenization.
//!
//! Feeds the phrase matcher: documents are split into sentences, and each
//! sentence into case-folded [`Word`] tokens. Boundary detection is a
//! character scan with abbreviation, initial, decimal, and ellipsis
//! awareness, which holds up better on technical prose than splitting on
//! bare punctuation.

use regex::Regex;
use std::sync::LazyLock;

use crate::word::Word;

/// Abbreviations whose trailing period does not end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc", "ltd", "co", "corp",
    "ave", "blvd", "dept", "est", "fig", "no", "vol", "approx", "e.g", "i.e",
];

/// Decimal numbers (3.14, 2.5, ...).
static DECIMAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+$").expect("valid regex"));

/// Initials and initialisms (J.K., U.S.A., ...), with or without the final
/// period, which the scan sees as the candidate terminator.
static INITIALS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Z]\.)+[A-Z]?$").expect("valid regex"));

/// Split text into sentences.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        current.push(ch);
        if matches!(ch, '.' | '!' | '?') && is_boundary(&chars, i, &current) {
            push_sentence(&mut sentences, &mut current);
        }
    }
    push_sentence(&mut sentences, &mut current);

    sentences
}

/// Tokenize a sentence into word tokens, stripping edge punctuation.
///
/// Interior apostrophes and hyphens survive ("don't", "well-known").
pub fn tokenize(sentence: &str) -> Vec<Word> {
    sentence
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'' && c != '-'))
        .filter(|w| !w.is_empty())
        .map(Word::new)
        .collect()
}

fn push_sentence(sentences: &mut Vec<String>, current: &mut String) {
    let sentence = current.trim();
    // Stray terminators and fragments shorter than this are noise.
    if sentence.len() >= 3 {
        sentences.push(sentence.to_string());
    }
    current.clear();
}

/// Decide whether the terminator at `pos` ends a sentence.
fn is_boundary(chars: &[char], pos: usize, current: &str) -> bool {
    let next = chars[pos + 1..].iter().find(|c| !c.is_whitespace());

    let Some(&next) = next else {
        return true;
    };

    if chars[pos] == '!' || chars[pos] == '?' {
        return true;
    }

    // Inside a run of periods the boundary decision waits for the last one;
    // an ellipsis then defers to the real terminator.
    if chars.get(pos + 1) == Some(&'.') {
        return false;
    }
    if current.ends_with("...") {
        return false;
    }

    let before = word_before(chars, pos);
    if is_abbreviation(&before) || INITIALS_PATTERN.is_match(&before) {
        return false;
    }
    if DECIMAL_PATTERN.is_match(current.trim_end_matches('.'))
        || (before.chars().last().is_some_and(|c| c.is_ascii_digit())
            && next.is_ascii_digit())
    {
        return false;
    }

    // A following lowercase letter argues against a boundary.
    !next.is_lowercase()
}

/// The word immediately before the terminator at `pos`, without its period.
fn word_before(chars: &[char], pos: usize) -> String {
    let start = chars[..pos]
        .iter()
        .rposition(|c| c.is_whitespace())
        .map_or(0, |i| i + 1);
    chars[start..pos].iter().collect()
}

fn is_abbreviation(word: &str) -> bool {
    let clean = word.trim_end_matches('.').to_lowercase();
    ABBREVIATIONS.contains(&clean.as_str())
        // Single capital letter reads as an initial.
        || (word.len() == 1 && word.chars().next().is_some_and(|c| c.is_uppercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_basic_sentences() {
        let sentences = split_sentences("This is one. This is two.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "This is one.");
    }

    #[test]
    fn keeps_abbreviations_together() {
        let sentences = split_sentences("Dr. Smith arrived late. He left early.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("Dr. Smith"));
    }

    #[test]
    fn keeps_decimals_together() {
        let sentences = split_sentences("It costs 3.14 dollars. Cheap.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("3.14"));
    }

    #[test]
    fn question_and_exclamation_split() {
        let sentences = split_sentences("Really? Yes! Good.");
        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn ellipsis_does_not_split() {
        let sentences = split_sentences("Well... maybe tomorrow. We will see.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "Well... maybe tomorrow.");
    }

    #[test]
    fn trailing_ellipsis_ends_the_text() {
        let sentences = split_sentences("It went on. And on...");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1], "And on...");
    }

    #[test]
    fn empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn tokenize_strips_punctuation_and_folds_case() {
        let words = tokenize("He wrote it, for the purpose of Clarity.");
        let texts: Vec<&str> = words.iter().map(Word::as_str).collect();
        assert_eq!(
            texts,
            vec!["he", "wrote", "it", "for", "the", "purpose", "of", "clarity"]
        );
    }

    #[test]
    fn tokenize_keeps_interior_marks() {
        let words = tokenize("Don't use well-known tricks.");
        assert_eq!(words[0].as_str(), "don't");
        assert_eq!(words[2].as_str(), "well-known");
    }
}
