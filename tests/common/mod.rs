//! Shared test utilities for integration test suites.
//!
//! Import via `mod common;` from any test's main.rs.

#![allow(dead_code)]

use deltasearch::{Engine, EngineConfig};
use std::path::Path;
use tempfile::TempDir;

/// The four-document collection used throughout the suites.
pub const COLLECTION: [(&str, &str); 4] = [
    ("greeting", "Do you quarrel, sir?"),
    ("reply", "Quarrel sir! no, sir!"),
    ("retort", "No better."),
    ("closing", "Well, sir"),
];

/// Engine writing to `dir` with an in-memory document store.
pub fn engine_at(dir: &Path) -> Engine {
    let config = EngineConfig {
        index_dir: dir.to_path_buf(),
        ..EngineConfig::default()
    };
    Engine::in_memory(config).unwrap()
}

/// Fresh temp dir plus an engine that has indexed and flushed `docs`.
pub fn flushed_engine(docs: &[(&str, &str)]) -> (TempDir, Engine) {
    let tmp = TempDir::new().unwrap();
    let mut engine = engine_at(tmp.path());
    for (title, text) in docs {
        engine.add_text(title, text).unwrap();
    }
    engine.flush().unwrap();
    (tmp, engine)
}
