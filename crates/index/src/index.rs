//! In-memory inverted index
//!
//! Maps each term to its posting list and counts submitted documents.
//! Built by a single `Indexer`, then handed read-only to the writer.

use crate::posting::PostingList;
use rustc_hash::FxHashMap;
use std::fmt;

/// Inverted index: term -> posting list, plus the document count
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Index {
    dictionary: FxHashMap<String, PostingList>,
    total_docs_count: u64,
}

impl Index {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble an index from existing posting lists
    pub fn from_parts(
        postings: impl IntoIterator<Item = (String, PostingList)>,
        total_docs_count: u64,
    ) -> Self {
        Index {
            dictionary: postings.into_iter().collect(),
            total_docs_count,
        }
    }

    /// Posting list for `term`
    pub fn posting_list(&self, term: &str) -> Option<&PostingList> {
        self.dictionary.get(term)
    }

    /// Posting list for `term`, created empty on first use
    pub(crate) fn posting_list_mut(&mut self, term: &str) -> &mut PostingList {
        self.dictionary.entry(term.to_owned()).or_default()
    }

    pub(crate) fn record_document(&mut self) {
        self.total_docs_count += 1;
    }

    /// Number of documents submitted, including ones that produced no terms
    pub fn total_docs_count(&self) -> u64 {
        self.total_docs_count
    }

    /// Iterate `(term, posting list)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PostingList)> {
        self.dictionary.iter().map(|(t, pl)| (t.as_str(), pl))
    }

    /// All terms, sorted
    pub fn sorted_terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.dictionary.keys().map(String::as_str).collect();
        terms.sort_unstable();
        terms
    }

    /// Number of distinct terms
    pub fn term_count(&self) -> usize {
        self.dictionary.len()
    }

    /// True if no term has been indexed
    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms = self.sorted_terms();
        let width = terms.iter().map(|t| t.chars().count()).max().unwrap_or(0);

        writeln!(f, "total documents: {}", self.total_docs_count)?;
        writeln!(f, "dictionary:")?;
        for term in terms {
            if let Some(list) = self.dictionary.get(term) {
                writeln!(f, "  [{:>width$}] -> {}", term, list, width = width)?;
            }
        }
        Ok(())
    }
}
