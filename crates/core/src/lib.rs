//! Core types for deltasearch
//!
//! This crate defines the foundational types shared by every layer:
//! - DocumentId: externally assigned, totally ordered document identifier
//! - Error: Error type hierarchy
//! - Result: crate-wide result alias

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::DocumentId;
