//! Forward-only, skip-capable iteration over a posting list
//!
//! A cursor is an index into the list's entries; `position >= len` means
//! exhausted. It borrows the list, so it can never outlive it.

use crate::posting::{Posting, PostingList};
use deltasearch_core::{DocumentId, Error, Result};

/// Cursor over one posting list
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    list: &'a PostingList,
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Open a cursor at the first entry of `list`
    pub fn new(list: &'a PostingList) -> Self {
        Cursor { list, position: 0 }
    }

    /// Move to the next entry; no-op once exhausted
    pub fn advance(&mut self) {
        if !self.is_exhausted() {
            self.position += 1;
        }
    }

    /// Advance until exhausted or positioned at the first entry with
    /// document id `>= target`
    ///
    /// Linear in the number of entries skipped. Never moves backwards, so
    /// calling it again with the same target is a no-op.
    pub fn skip_to(&mut self, target: DocumentId) {
        while let Some(posting) = self.list.get(self.position) {
            if posting.doc_id() >= target {
                break;
            }
            self.position += 1;
        }
    }

    /// True once the cursor has moved past the last entry
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.list.len()
    }

    /// Posting under the cursor
    pub fn current_posting(&self) -> Result<&'a Posting> {
        self.list
            .get(self.position)
            .ok_or_else(|| Error::invalid_state("cursor is exhausted"))
    }

    /// Document id under the cursor
    pub fn current_doc_id(&self) -> Result<DocumentId> {
        self.current_posting().map(Posting::doc_id)
    }

    /// The list this cursor walks
    pub fn posting_list(&self) -> &'a PostingList {
        self.list
    }

    /// Index of the current entry within the list
    pub fn position(&self) -> usize {
        self.position
    }
}
