//! Case-insensitive word tokens.
//!
//! [`Word`] is the unit the phrase matcher operates on: an immutable string
//! value normalized to Unicode lowercase at construction. Comparing two
//! `Word`s is plain byte-wise comparison over the normalized form, which
//! keeps ordering locale-invariant and keeps the dictionary search path
//! free of per-comparison case folding.

use serde::{Deserialize, Serialize};

/// A single case-insensitive word token.
///
/// Ordering and equality are lexicographic over the lowercased form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    /// Create a word token, folding to Unicode lowercase.
    pub fn new(text: &str) -> Self {
        Self(text.to_lowercase())
    }

    /// The normalized (lowercase) text of this word.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_ignores_case() {
        assert_eq!(Word::new("Hello"), Word::new("hello"));
        assert_eq!(Word::new("WORLD"), Word::new("world"));
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Word::new("apple") < Word::new("banana"));
        assert!(Word::new("Apple") < Word::new("banana"));
        assert!(Word::new("an") < Word::new("and"));
    }

    #[test]
    fn display_shows_normalized_form() {
        assert_eq!(Word::new("Mixed").to_string(), "mixed");
    }
}
