//! deltasearch - minimal full-text search engine
//!
//! Documents are tokenized into terms, indexed into per-term posting lists,
//! and flushed to a directory holding one JSON file per term plus a
//! document count file. Queries are conjunctive: a document matches only if
//! it contains every query term, and matches are ranked by TF-IDF.
//!
//! # Quick Start
//!
//! ```ignore
//! use deltasearch::{Engine, EngineConfig};
//!
//! let mut engine = Engine::in_memory(EngineConfig::default())?;
//! engine.add_text("greeting", "Do you quarrel, sir?")?;
//! engine.add_text("reply", "Quarrel sir! no, sir!")?;
//! engine.flush()?;
//!
//! let reader = engine.open_reader();
//! for hit in engine.search("quarrel sir", 10, &reader)? {
//!     println!("{} {:.3} {}", hit.doc_id, hit.score, hit.title);
//! }
//! ```
//!
//! # Architecture
//!
//! - `core`: DocumentId and the shared error type
//! - `index`: tokenizers, postings, cursors, and the in-memory indexer
//! - `storage`: IndexWriter / IndexReader over the on-disk layout
//! - `search`: cursor intersection, scoring, top-k
//! - `engine`: configuration, document store, orchestration

pub use deltasearch_core as core;
pub use deltasearch_engine as engine;
pub use deltasearch_index as index;
pub use deltasearch_search as search;
pub use deltasearch_storage as storage;

pub use deltasearch_core::{DocumentId, Error, Result};
pub use deltasearch_engine::{DocumentStore, Engine, EngineConfig, MemoryDocumentStore, SearchResult};
pub use deltasearch_index::{Cursor, Index, Indexer, Posting, PostingList, Tokenizer, TokenizerKind};
pub use deltasearch_search::{Scorer, Searcher, TfIdfScorer, TopDocs};
pub use deltasearch_storage::{IndexReader, IndexWriter};
