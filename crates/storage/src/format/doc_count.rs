//! Document-count file format

use deltasearch_core::{Error, Result};
use std::path::{Path, PathBuf};

/// Fixed name of the document-count file
pub const DOC_COUNT_FILE_NAME: &str = "_0.dc";

/// Path of the document-count file inside `index_dir`
pub fn doc_count_path(index_dir: &Path) -> PathBuf {
    index_dir.join(DOC_COUNT_FILE_NAME)
}

/// Encode a count as a bare decimal integer (no trailing newline)
pub fn encode_doc_count(count: u64) -> String {
    count.to_string()
}

/// Decode a count; surrounding ASCII whitespace is tolerated
pub fn decode_doc_count(bytes: &[u8]) -> Result<u64> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| Error::Deserialization(format!("document count is not UTF-8: {}", e)))?;
    text.trim()
        .parse::<u64>()
        .map_err(|e| Error::Deserialization(format!("invalid document count {:?}: {}", text, e)))
}
