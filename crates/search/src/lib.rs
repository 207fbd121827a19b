//! Search for deltasearch
//!
//! This crate provides:
//! - Scorer trait for pluggable per-term scoring
//! - TfIdfScorer default implementation
//! - Searcher: multi-term AND queries over an `IndexReader`
//! - TopDocs / ScoreDoc ranked results
//!
//! # Usage
//!
//! ```ignore
//! use deltasearch_search::Searcher;
//! use deltasearch_storage::IndexReader;
//!
//! let reader = IndexReader::new("_index_data");
//! let top = Searcher::new(&reader).search_top_k(&["quarrel", "sir"], 10)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod scorer;
pub mod searcher;

// Re-export commonly used types
pub use scorer::{idf, tf, Scorer, TfIdfScorer};
pub use searcher::{intersect, ScoreDoc, Searcher, TopDocs};
