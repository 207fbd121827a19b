//! Orchestration layer for deltasearch
//!
//! This crate provides:
//! - EngineConfig loaded from `deltasearch.toml`
//! - DocumentStore trait and MemoryDocumentStore
//! - Engine: add documents, flush the index, search with resolved titles
//!
//! # Usage
//!
//! ```ignore
//! use deltasearch_engine::{Engine, EngineConfig};
//!
//! let mut engine = Engine::in_memory(EngineConfig::default().with_env_overrides())?;
//! engine.add_text("hamlet", "Do you quarrel, sir?")?;
//! engine.flush()?;
//!
//! let reader = engine.open_reader();
//! let hits = engine.search("quarrel", 10, &reader)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod engine;
pub mod store;

pub use config::{EngineConfig, CONFIG_FILE_NAME, DEFAULT_INDEX_DIR, INDEX_DIR_ENV};
pub use engine::{Engine, SearchResult};
pub use store::{DocumentStore, MemoryDocumentStore};
