//! Index reader: lazy, cached access to a flushed index directory
//!
//! The directory is the only source of truth and is never written here.
//!
//! # Absence vs. failure
//!
//! - missing term file, corrupt term file, or a term that cannot name a file:
//!   `Ok(None)` (corruption is logged at `warn`)
//! - any other I/O failure: `Err(Persistence)`
//!
//! # Thread Safety
//!
//! All methods take `&self`. The posting cache sits behind a `RwLock`; a miss
//! loads the file without holding the lock, so two threads racing on the same
//! term may both read it, and the first insert wins. The document count is
//! cached in an atomic where 0 means "not cached yet".

use crate::format;
use deltasearch_core::{Error, Result};
use deltasearch_index::PostingList;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Reads posting lists and the document count from an index directory
#[derive(Debug)]
pub struct IndexReader {
    index_dir: PathBuf,
    posting_cache: RwLock<HashMap<String, Arc<PostingList>>>,
    doc_count_cache: AtomicU64,
}

impl IndexReader {
    /// Create a reader over `index_dir`; nothing is read until first use
    pub fn new(index_dir: impl Into<PathBuf>) -> Self {
        IndexReader {
            index_dir: index_dir.into(),
            posting_cache: RwLock::new(HashMap::new()),
            doc_count_cache: AtomicU64::new(0),
        }
    }

    /// Directory this reader loads from
    pub fn index_dir(&self) -> &Path {
        &self.index_dir
    }

    /// Posting list for `term`, loading and caching it on first access
    pub fn posting_list(&self, term: &str) -> Result<Option<Arc<PostingList>>> {
        if let Some(list) = self.posting_cache.read().get(term) {
            return Ok(Some(Arc::clone(list)));
        }

        if !format::is_valid_term(term) {
            tracing::debug!(
                target: "deltasearch::storage",
                term = %term,
                "Term cannot name an index file, treating as absent"
            );
            return Ok(None);
        }

        let path = format::term_path(&self.index_dir, term);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::persistence(&path, e)),
        };

        let list = match format::decode_posting_list(&bytes) {
            Ok(list) => Arc::new(list),
            Err(e) => {
                tracing::warn!(
                    target: "deltasearch::storage",
                    term = %term,
                    error = %e,
                    "Corrupt posting list file, treating as absent"
                );
                return Ok(None);
            }
        };

        let mut cache = self.posting_cache.write();
        let cached = cache.entry(term.to_owned()).or_insert(list);
        Ok(Some(Arc::clone(cached)))
    }

    /// Posting lists for `terms`, in order, skipping absent terms
    pub fn posting_lists<S: AsRef<str>>(&self, terms: &[S]) -> Result<Vec<Arc<PostingList>>> {
        let mut lists = Vec::with_capacity(terms.len());
        for term in terms {
            if let Some(list) = self.posting_list(term.as_ref())? {
                lists.push(list);
            }
        }
        Ok(lists)
    }

    /// Total number of indexed documents, 0 if unknown
    ///
    /// A missing or unparsable count file yields 0. Since 0 doubles as the
    /// "not cached" marker, failed reads are retried on the next call, and a
    /// stored count of exactly 0 is re-read every time.
    pub fn total_doc_count(&self) -> u64 {
        let cached = self.doc_count_cache.load(Ordering::Acquire);
        if cached > 0 {
            return cached;
        }

        let path = format::doc_count_path(&self.index_dir);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    tracing::warn!(
                        target: "deltasearch::storage",
                        path = %path.display(),
                        error = %e,
                        "Failed to read document count"
                    );
                }
                return 0;
            }
        };

        match format::decode_doc_count(&bytes) {
            Ok(count) => {
                self.doc_count_cache.store(count, Ordering::Release);
                count
            }
            Err(e) => {
                tracing::warn!(
                    target: "deltasearch::storage",
                    path = %path.display(),
                    error = %e,
                    "Corrupt document count file"
                );
                0
            }
        }
    }

    /// Number of posting lists currently cached
    pub fn cached_terms(&self) -> usize {
        self.posting_cache.read().len()
    }
}
