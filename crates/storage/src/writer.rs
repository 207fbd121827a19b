//! Index writer: persists an in-memory index to a directory
//!
//! Files are overwritten in place. There is no temp-file + rename staging:
//! if a term write fails, the flush stops there, leaving earlier term files
//! updated and later ones untouched, and the document count is not written.
//!
//! After every term is written, posting-list files for terms the index no
//! longer holds are removed, so document ids from an earlier index cannot
//! leak into the new one. Files that do not decode as posting lists are left
//! alone.

use crate::format;
use deltasearch_core::{Error, Result};
use deltasearch_index::{Index, PostingList};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes posting lists and the document count into an index directory
#[derive(Debug, Clone)]
pub struct IndexWriter {
    index_dir: PathBuf,
}

impl IndexWriter {
    /// Create a writer for `index_dir`
    pub fn new(index_dir: impl Into<PathBuf>) -> Self {
        IndexWriter {
            index_dir: index_dir.into(),
        }
    }

    /// Directory this writer flushes into
    pub fn index_dir(&self) -> &Path {
        &self.index_dir
    }

    /// Persist every posting list of `index`, then its document count
    ///
    /// Terms are written in sorted order. Creates the directory if missing.
    ///
    /// # Errors
    ///
    /// Returns the first `Persistence` error; nothing after it is written.
    pub fn flush(&self, index: &Index) -> Result<()> {
        fs::create_dir_all(&self.index_dir)
            .map_err(|e| Error::persistence(&self.index_dir, e))?;

        let mut entries: Vec<(&str, &PostingList)> = index.iter().collect();
        entries.sort_unstable_by_key(|(term, _)| *term);

        for (term, list) in &entries {
            if let Err(e) = self.flush_posting_list(term, list) {
                tracing::error!(
                    target: "deltasearch::storage",
                    term = %term,
                    error = %e,
                    "Failed to save posting list, aborting flush"
                );
                return Err(e);
            }
        }

        let pruned = self.prune_stale_terms(index)?;
        self.write_doc_count(index.total_docs_count())?;

        tracing::info!(
            target: "deltasearch::storage",
            dir = %self.index_dir.display(),
            terms = entries.len(),
            pruned,
            total_docs = index.total_docs_count(),
            "Index flushed to disk"
        );
        Ok(())
    }

    /// Write one term's posting list, replacing any existing file
    pub fn flush_posting_list(&self, term: &str, list: &PostingList) -> Result<()> {
        let path = format::term_path(&self.index_dir, term);
        let bytes = format::encode_posting_list(list)?;

        let file = fs::File::create(&path).map_err(|e| Error::persistence(&path, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(&bytes)
            .map_err(|e| Error::persistence(&path, e))?;
        writer.flush().map_err(|e| Error::persistence(&path, e))
    }

    /// Remove posting-list files whose term is absent from `index`
    fn prune_stale_terms(&self, index: &Index) -> Result<usize> {
        let dir_err = |e| Error::persistence(&self.index_dir, e);
        let mut removed = 0;

        for entry in fs::read_dir(&self.index_dir).map_err(dir_err)? {
            let entry = entry.map_err(dir_err)?;
            let name = entry.file_name();
            let Some(term) = name.to_str() else { continue };
            if term == format::DOC_COUNT_FILE_NAME
                || !format::is_valid_term(term)
                || index.posting_list(term).is_some()
            {
                continue;
            }
            if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                continue;
            }

            let path = entry.path();
            let is_posting_file = fs::read(&path)
                .map(|bytes| format::decode_posting_list(&bytes).is_ok())
                .unwrap_or(false);
            if !is_posting_file {
                continue;
            }

            fs::remove_file(&path).map_err(|e| Error::persistence(&path, e))?;
            tracing::debug!(
                target: "deltasearch::storage",
                term = %term,
                "Removed stale posting list"
            );
            removed += 1;
        }
        Ok(removed)
    }

    fn write_doc_count(&self, count: u64) -> Result<()> {
        let path = format::doc_count_path(&self.index_dir);
        fs::write(&path, format::encode_doc_count(count)).map_err(|e| Error::persistence(&path, e))
    }
}
