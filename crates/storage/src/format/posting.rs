//! Posting-list file format
//!
//! Each term's posting list is stored as JSON in a file named after the
//! term. Decoding validates the list (ascending ids, term frequency equal
//! to the number of positions).

use deltasearch_core::Result;
use deltasearch_index::PostingList;
use std::path::{Path, PathBuf};

/// Path of `term`'s posting-list file inside `index_dir`
///
/// The term is used verbatim; callers are responsible for the term being a
/// valid single file name (see `is_valid_term`).
pub fn term_path(index_dir: &Path, term: &str) -> PathBuf {
    index_dir.join(term)
}

/// True if `term` can name a file directly inside the index directory
pub fn is_valid_term(term: &str) -> bool {
    !term.is_empty()
        && term != "."
        && term != ".."
        && !term.contains(|c: char| c == '/' || c == '\\' || c == '\0')
}

/// Serialize a posting list
pub fn encode_posting_list(list: &PostingList) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(list)?)
}

/// Deserialize and validate a posting list
pub fn decode_posting_list(bytes: &[u8]) -> Result<PostingList> {
    Ok(serde_json::from_slice(bytes)?)
}
