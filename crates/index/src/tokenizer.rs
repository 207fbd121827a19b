//! Text tokenizers for indexing and query parsing
//!
//! A tokenizer turns raw text into an ordered sequence of normalized terms.
//! The same tokenizer must be used for building the index and for turning
//! query strings into terms, otherwise lookups miss.
//!
//! Every term produced here becomes a file name in the index directory, so
//! a tokenizer's vocabulary must never contain path separators or names
//! reserved by the filesystem.

use deltasearch_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;
use std::str::FromStr;
use std::sync::Arc;

// ============================================================================
// Tokenizer Trait
// ============================================================================

/// Pluggable tokenization capability
///
/// Implementations only need `split_terms`; `text_to_term_sequence` is the
/// same operation applied to an in-memory string.
pub trait Tokenizer: Send + Sync {
    /// Split the content of `reader` into normalized terms, in order
    fn split_terms(&self, reader: &mut dyn Read) -> Result<Vec<String>>;

    /// Split a string into normalized terms, in order
    fn text_to_term_sequence(&self, text: &str) -> Result<Vec<String>> {
        let mut bytes = text.as_bytes();
        self.split_terms(&mut bytes)
    }

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

// ============================================================================
// EnglishTokenizer
// ============================================================================

/// Whitespace tokenizer for English text
///
/// - Split on whitespace
/// - Strip every character that is not an ASCII letter or digit
/// - Lowercase
/// - Drop chunks left empty by stripping
///
/// # Example
///
/// ```
/// use deltasearch_index::tokenizer::{EnglishTokenizer, Tokenizer};
///
/// let terms = EnglishTokenizer.text_to_term_sequence("Quarrel sir! no, sir!").unwrap();
/// assert_eq!(terms, vec!["quarrel", "sir", "no", "sir"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishTokenizer;

impl EnglishTokenizer {
    /// Normalize one whitespace-delimited chunk, `None` if nothing survives
    fn normalize(chunk: &str) -> Option<String> {
        let term: String = chunk
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if term.is_empty() {
            None
        } else {
            Some(term)
        }
    }
}

impl Tokenizer for EnglishTokenizer {
    fn split_terms(&self, reader: &mut dyn Read) -> Result<Vec<String>> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;

        // Non-UTF-8 bytes are never ASCII alphanumerics, so lossy decoding
        // cannot change the produced terms.
        let text = String::from_utf8_lossy(&buf);
        Ok(text.split_whitespace().filter_map(Self::normalize).collect())
    }

    fn name(&self) -> &str {
        "english"
    }
}

// ============================================================================
// UnsegmentedTokenizer
// ============================================================================

/// Placeholder for scripts without whitespace word boundaries
///
/// No segmentation algorithm ships with this crate. Rather than silently
/// returning no terms (which would index nothing and match nothing), every
/// call fails with `Error::Unsupported`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsegmentedTokenizer;

impl Tokenizer for UnsegmentedTokenizer {
    fn split_terms(&self, _reader: &mut dyn Read) -> Result<Vec<String>> {
        Err(Error::Unsupported(
            "word segmentation for non-whitespace-delimited scripts is not implemented".into(),
        ))
    }

    fn name(&self) -> &str {
        "unsegmented"
    }
}

// ============================================================================
// TokenizerKind
// ============================================================================

/// Tokenizer selection, as written in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    /// `EnglishTokenizer`
    #[default]
    English,
    /// `UnsegmentedTokenizer`
    Unsegmented,
}

impl TokenizerKind {
    /// Instantiate the selected tokenizer
    pub fn build(&self) -> Arc<dyn Tokenizer> {
        match self {
            TokenizerKind::English => Arc::new(EnglishTokenizer),
            TokenizerKind::Unsegmented => Arc::new(UnsegmentedTokenizer),
        }
    }

    /// Configuration name of this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenizerKind::English => "english",
            TokenizerKind::Unsegmented => "unsegmented",
        }
    }
}

impl FromStr for TokenizerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "english" => Ok(TokenizerKind::English),
            "unsegmented" => Ok(TokenizerKind::Unsegmented),
            other => Err(Error::Config(format!(
                "Unknown tokenizer '{}'. Expected \"english\" or \"unsegmented\".",
                other
            ))),
        }
    }
}

impl fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
