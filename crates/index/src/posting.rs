//! Postings and posting lists
//!
//! A posting records one document's occurrences of a term. A posting list
//! holds the postings of one term ordered by ascending document id, with at
//! most one posting per document.
//!
//! # Invariants
//!
//! - `term_frequency == positions.len()` for every posting
//! - document ids strictly ascend along a posting list
//!
//! Both are enforced on construction, on merge, and on deserialization: a
//! serialized list that violates them is rejected as corrupt.

use crate::cursor::Cursor;
use deltasearch_core::{DocumentId, Error};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

// ============================================================================
// Posting
// ============================================================================

/// One document's occurrence record for a term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    #[serde(rename = "docID")]
    doc_id: DocumentId,
    positions: Vec<u64>,
    #[serde(rename = "termFrequency")]
    term_frequency: u64,
}

impl Posting {
    /// Create a posting; the term frequency is the number of positions
    pub fn new(doc_id: DocumentId, positions: Vec<u64>) -> Self {
        let term_frequency = positions.len() as u64;
        Posting {
            doc_id,
            positions,
            term_frequency,
        }
    }

    /// Create a posting for a single occurrence at `position`
    pub fn at(doc_id: DocumentId, position: u64) -> Self {
        Self::new(doc_id, vec![position])
    }

    /// Document this posting belongs to
    pub fn doc_id(&self) -> DocumentId {
        self.doc_id
    }

    /// Token offsets of the term within the document
    pub fn positions(&self) -> &[u64] {
        &self.positions
    }

    /// Occurrences of the term within the document
    pub fn term_frequency(&self) -> u64 {
        self.term_frequency
    }

    /// Absorb a later posting for the same document
    fn merge(&mut self, other: Posting) {
        debug_assert_eq!(self.doc_id, other.doc_id);
        self.term_frequency += other.positions.len() as u64;
        self.positions.extend(other.positions);
    }

    fn is_consistent(&self) -> bool {
        self.term_frequency == self.positions.len() as u64
    }
}

impl fmt::Display for Posting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{:?})", self.doc_id, self.term_frequency, self.positions)
    }
}

// ============================================================================
// PostingList
// ============================================================================

/// Postings for one term, ordered by ascending document id
///
/// Serialized as a bare array of posting records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Posting>")]
pub struct PostingList {
    entries: Vec<Posting>,
}

impl PostingList {
    /// Create a new empty posting list
    pub fn new() -> Self {
        PostingList { entries: vec![] }
    }

    /// Build a list from postings, merging consecutive same-document entries
    ///
    /// Equivalent to calling `add` for each posting in order.
    pub fn from_postings(postings: impl IntoIterator<Item = Posting>) -> Self {
        let mut list = PostingList::new();
        for posting in postings {
            list.add(posting);
        }
        list
    }

    /// Add a posting
    ///
    /// Appends when the list is empty or the last entry belongs to another
    /// document. Otherwise the incoming positions are merged into the last
    /// entry. Postings must arrive in non-decreasing document id order.
    pub fn add(&mut self, posting: Posting) {
        match self.entries.last_mut() {
            Some(last) if last.doc_id == posting.doc_id => last.merge(posting),
            last => {
                debug_assert!(
                    last.map_or(true, |l| l.doc_id < posting.doc_id),
                    "postings must be added in ascending document order"
                );
                self.entries.push(posting);
            }
        }
    }

    /// Number of documents containing this term
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if posting list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Posting at `index`
    pub fn get(&self, index: usize) -> Option<&Posting> {
        self.entries.get(index)
    }

    /// Last posting, if any
    pub fn last(&self) -> Option<&Posting> {
        self.entries.last()
    }

    /// Iterate postings in document order
    pub fn iter(&self) -> std::slice::Iter<'_, Posting> {
        self.entries.iter()
    }

    /// Document ids in list order
    pub fn doc_ids(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.entries.iter().map(|p| p.doc_id)
    }

    /// Open a cursor positioned at the first posting
    pub fn open_cursor(&self) -> Cursor<'_> {
        Cursor::new(self)
    }
}

impl TryFrom<Vec<Posting>> for PostingList {
    type Error = Error;

    fn try_from(entries: Vec<Posting>) -> Result<Self, Self::Error> {
        if let Some(bad) = entries.iter().find(|p| !p.is_consistent()) {
            return Err(Error::Deserialization(format!(
                "posting for document {} has term frequency {} but {} positions",
                bad.doc_id,
                bad.term_frequency,
                bad.positions.len()
            )));
        }
        if let Some(pair) = entries.windows(2).find(|w| w[0].doc_id >= w[1].doc_id) {
            return Err(Error::Deserialization(format!(
                "posting list not in ascending document order: {} then {}",
                pair[0].doc_id, pair[1].doc_id
            )));
        }
        Ok(PostingList { entries })
    }
}

impl Serialize for PostingList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'a> IntoIterator for &'a PostingList {
    type Item = &'a Posting;
    type IntoIter = std::slice::Iter<'a, Posting>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for PostingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, posting) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("=>")?;
            }
            write!(f, "{}", posting)?;
        }
        Ok(())
    }
}
