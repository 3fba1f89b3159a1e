//! Core library for phraselint.
//!
//! A lexical pattern-matching engine for prose: a sorted dictionary of
//! multi-word phrases (wordy expressions, redundancies, clichés, grammar
//! errors) is matched against tokenized sentences, longest match winning,
//! with contextual exception words able to veto a hit.
//!
//! # Modules
//!
//! - [`word`], [`phrase`] - Word tokens and phrase entities
//! - [`collection`] - The sorted, searchable phrase dictionary
//! - [`word_lists`] - Built-in dictionaries
//! - [`text`] - Sentence segmentation and tokenization
//! - [`checker`] - The phrase-checking pass over whole texts
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use phraselint_core::checker::check_phrases;
//! use phraselint_core::word_lists::builtin_collection;
//!
//! let dictionary = builtin_collection();
//! let report = check_phrases("We met in order to talk.", &dictionary, false)
//!     .expect("non-empty input");
//! assert_eq!(report.issues[0].phrase, "in order to");
//! ```
#![deny(unsafe_code)]

pub mod checker;
pub mod collection;
pub mod config;
pub mod error;
pub mod phrase;
pub mod text;
pub mod word;
pub mod word_lists;

pub use collection::{PhraseCollection, PhraseEntry};
pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult, DictionaryError};
pub use phrase::{MatchOutcome, Phrase, PhraseKind};
pub use word::Word;

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
