//! Error types for deltasearch
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::types::DocumentId;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for deltasearch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for deltasearch
#[derive(Debug, Error)]
pub enum Error {
    /// File creation/open/read/write failure during flush or load
    #[error("Persistence error at {}: {source}", path.display())]
    Persistence {
        /// File or directory the operation touched
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// I/O error on a non-file stream (e.g. document content reader)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed posting-list or document-count content
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Operation not valid in the current state (e.g. reading an exhausted cursor)
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Document store has no entry for this id
    #[error("Document not found: {0}")]
    DocumentNotFound(DocumentId),

    /// Capability selected but not implemented
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build a persistence error for `path`
    pub fn persistence(path: impl AsRef<Path>, source: io::Error) -> Self {
        Error::Persistence {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Build an invalid-state error
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Error::InvalidState(msg.into())
    }

    /// True if this is a persistence error caused by a missing file
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Persistence { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }

    /// True if this is an invalid-state error
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Error::InvalidState(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Deserialization(e.to_string())
    }
}
