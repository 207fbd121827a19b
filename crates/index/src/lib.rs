//! In-memory inverted index for deltasearch
//!
//! This crate provides:
//! - Tokenizer trait with English and (unimplemented) unsegmented variants
//! - Posting / PostingList data model
//! - Cursor for skip-ahead iteration over a posting list
//! - Index: term -> posting list dictionary plus document count
//! - Indexer: builds an Index from documents

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cursor;
pub mod index;
pub mod indexer;
pub mod posting;
pub mod tokenizer;

// Re-export commonly used types
pub use cursor::Cursor;
pub use index::Index;
pub use indexer::Indexer;
pub use posting::{Posting, PostingList};
pub use tokenizer::{EnglishTokenizer, Tokenizer, TokenizerKind, UnsegmentedTokenizer};
