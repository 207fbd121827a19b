//! End-to-end tests across indexing, persistence, and search.

#[path = "../common/mod.rs"]
mod common;

mod concurrent_readers;
mod end_to_end;
mod on_disk;
