//! Index construction
//!
//! The indexer tokenizes each submitted document and appends one posting
//! per term occurrence. Positions are offsets within the produced term
//! sequence, not within the raw text.

use crate::index::Index;
use crate::posting::Posting;
use crate::tokenizer::Tokenizer;
use deltasearch_core::{DocumentId, Error, Result};
use std::io::Read;
use std::sync::Arc;

/// Builds an `Index` from documents submitted in document id order
pub struct Indexer {
    index: Index,
    tokenizer: Arc<dyn Tokenizer>,
    last_doc_id: Option<DocumentId>,
}

impl Indexer {
    /// Create an indexer with an empty index
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Indexer {
            index: Index::new(),
            tokenizer,
            last_doc_id: None,
        }
    }

    /// Tokenize `content` and add its terms under `doc_id`
    ///
    /// The document count grows by one even when no terms are produced.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if `doc_id` is lower than a previously submitted id
    /// - any tokenizer failure; the index is left untouched
    pub fn build_from_document(&mut self, doc_id: DocumentId, content: &mut dyn Read) -> Result<()> {
        if let Some(last) = self.last_doc_id {
            if doc_id < last {
                return Err(Error::invalid_state(format!(
                    "document {} submitted after document {}",
                    doc_id, last
                )));
            }
        }

        let terms = self.tokenizer.split_terms(content)?;

        for (pos, term) in terms.iter().enumerate() {
            self.index
                .posting_list_mut(term)
                .add(Posting::at(doc_id, pos as u64));
        }

        self.index.record_document();
        self.last_doc_id = Some(doc_id);

        tracing::trace!(
            target: "deltasearch::index",
            doc_id = %doc_id,
            terms = terms.len(),
            "Document indexed"
        );
        Ok(())
    }

    /// Convenience wrapper over `build_from_document` for in-memory text
    pub fn build_from_text(&mut self, doc_id: DocumentId, text: &str) -> Result<()> {
        let mut bytes = text.as_bytes();
        self.build_from_document(doc_id, &mut bytes)
    }

    /// The index built so far
    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Consume the indexer, yielding the index
    pub fn into_index(self) -> Index {
        self.index
    }

    /// Tokenizer used for documents (and, by the engine, for queries)
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }
}
