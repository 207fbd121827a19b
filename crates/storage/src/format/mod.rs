//! On-disk byte formats for the index directory.
//!
//! This module centralizes all serialization logic for persistent storage.
//! Keeping serialization separate from operational logic (when and where
//! files are written) makes format evolution easier to manage.
//!
//! # Directory Layout
//!
//! - one file per term, named exactly as the term, holding a JSON array of
//!   `{docID, positions, termFrequency}` records in ascending `docID` order
//! - `_0.dc`: total document count as a bare decimal integer
//!
//! # Module Structure
//!
//! - `posting`: posting-list file encoding and term file naming
//! - `doc_count`: document-count file encoding

pub mod doc_count;
pub mod posting;

pub use doc_count::{decode_doc_count, doc_count_path, encode_doc_count, DOC_COUNT_FILE_NAME};
pub use posting::{decode_posting_list, encode_posting_list, is_valid_term, term_path};
