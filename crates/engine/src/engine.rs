//! Engine: wires tokenizer, indexer, document store, and persistence
//!
//! Indexing happens in memory; `flush` writes the whole index to the
//! configured directory. Searches run against an `IndexReader`, which the
//! caller owns so its cache can outlive a single query.

use crate::config::EngineConfig;
use crate::store::{DocumentStore, MemoryDocumentStore};
use deltasearch_core::{DocumentId, Result};
use deltasearch_index::{Index, Indexer, Tokenizer};
use deltasearch_search::Searcher;
use deltasearch_storage::{IndexReader, IndexWriter};
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

/// One resolved search hit
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Matched document
    pub doc_id: DocumentId,
    /// Relevance score
    pub score: f64,
    /// Title from the document store
    pub title: String,
}

/// Full-text search engine over one index directory
pub struct Engine {
    config: EngineConfig,
    tokenizer: Arc<dyn Tokenizer>,
    indexer: Indexer,
    store: Arc<dyn DocumentStore>,
    writer: IndexWriter,
}

impl Engine {
    /// Create an engine backed by `store`
    ///
    /// # Errors
    ///
    /// `Config` if the configured tokenizer is unknown.
    pub fn new(config: EngineConfig, store: Arc<dyn DocumentStore>) -> Result<Self> {
        let kind = config.tokenizer_kind()?;
        let tokenizer = kind.build();

        tracing::info!(
            target: "deltasearch::engine",
            index_dir = %config.index_dir.display(),
            tokenizer = tokenizer.name(),
            "Engine opened"
        );

        Ok(Engine {
            indexer: Indexer::new(Arc::clone(&tokenizer)),
            writer: IndexWriter::new(config.index_dir.clone()),
            tokenizer,
            store,
            config,
        })
    }

    /// Create an engine with a fresh `MemoryDocumentStore`
    pub fn in_memory(config: EngineConfig) -> Result<Self> {
        Self::new(config, Arc::new(MemoryDocumentStore::new()))
    }

    /// Save `title` to obtain an id, then index `content` under it
    ///
    /// If indexing fails the title stays saved and the id is consumed.
    pub fn add_document(&mut self, title: &str, content: &mut dyn Read) -> Result<DocumentId> {
        let id = self.store.save(title)?;
        self.indexer.build_from_document(id, content)?;
        Ok(id)
    }

    /// `add_document` for in-memory text
    pub fn add_text(&mut self, title: &str, text: &str) -> Result<DocumentId> {
        let mut bytes = text.as_bytes();
        self.add_document(title, &mut bytes)
    }

    /// Write the in-memory index to the index directory
    pub fn flush(&self) -> Result<()> {
        self.writer.flush(self.indexer.index())
    }

    /// Open a reader over the index directory
    pub fn open_reader(&self) -> IndexReader {
        IndexReader::new(self.config.index_dir.clone())
    }

    /// Tokenize `query`, run an AND search, and resolve titles
    ///
    /// # Errors
    ///
    /// `DocumentNotFound` if a hit has no title; remaining hits are not
    /// resolved. Tokenizer and reader errors propagate.
    pub fn search(&self, query: &str, k: usize, reader: &IndexReader) -> Result<Vec<SearchResult>> {
        let terms = self.tokenizer.text_to_term_sequence(query)?;
        let top = Searcher::new(reader).search_top_k(&terms, k)?;

        let mut results = Vec::with_capacity(top.score_docs.len());
        for doc in top.score_docs {
            let title = self.store.fetch_title(doc.doc_id)?;
            results.push(SearchResult {
                doc_id: doc.doc_id,
                score: doc.score,
                title,
            });
        }
        Ok(results)
    }

    /// The in-memory index built so far
    pub fn index(&self) -> &Index {
        self.indexer.index()
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Directory `flush` writes to
    pub fn index_dir(&self) -> &Path {
        self.writer.index_dir()
    }
}
