//! Core types for deltasearch
//!
//! This module defines:
//! - DocumentId: opaque 64-bit document identifier

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an indexed document
///
/// Assigned by the document store, monotonically increasing in the order
/// documents are submitted to the indexer. Posting lists rely on this:
/// entries are appended in non-decreasing id order and never re-sorted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DocumentId(u64);

impl DocumentId {
    /// Wrap a raw identifier
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw identifier value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for DocumentId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
