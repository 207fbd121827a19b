//! Persistence layer for deltasearch
//!
//! This crate provides:
//! - `format`: on-disk encodings for posting lists and the document count
//! - `IndexWriter`: flushes an in-memory `Index` to a directory
//! - `IndexReader`: lazily loads and caches posting lists from a directory
//!
//! # Concurrency
//!
//! Writers and readers on the same directory are not coordinated. Flushing
//! while a reader is loading may expose a partially updated directory.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod format;
pub mod reader;
pub mod writer;

pub use format::DOC_COUNT_FILE_NAME;
pub use reader::IndexReader;
pub use writer::IndexWriter;
