//! On-disk layout written by IndexWriter and read back by IndexReader.

use crate::common::*;
use deltasearch::{DocumentId, Error, Index, IndexReader, IndexWriter, Indexer, TokenizerKind};
use std::fs;
use tempfile::TempDir;

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_one_file_per_term_plus_doc_count() {
    let (tmp, engine) = flushed_engine(&COLLECTION);

    let mut names: Vec<String> = fs::read_dir(tmp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    let mut expected: Vec<String> = engine
        .index()
        .sorted_terms()
        .into_iter()
        .map(str::to_owned)
        .collect();
    expected.push("_0.dc".to_owned());
    expected.sort();

    assert_eq!(names, expected);
}

#[test]
fn test_doc_count_file_is_decimal() {
    let (tmp, _engine) = flushed_engine(&COLLECTION);
    let text = fs::read_to_string(tmp.path().join("_0.dc")).unwrap();
    assert_eq!(text.trim(), "4");
}

#[test]
fn test_posting_file_json_shape() {
    let (tmp, _engine) = flushed_engine(&COLLECTION);

    let value: serde_json::Value =
        serde_json::from_slice(&fs::read(tmp.path().join("sir")).unwrap()).unwrap();
    let expected = serde_json::json!([
        {"docID": 0, "positions": [3], "termFrequency": 1},
        {"docID": 1, "positions": [1, 3], "termFrequency": 2},
        {"docID": 3, "positions": [1], "termFrequency": 1},
    ]);
    assert_eq!(value, expected);
}

#[test]
fn test_reader_matches_in_memory_index() {
    let (tmp, engine) = flushed_engine(&COLLECTION);
    let reader = IndexReader::new(tmp.path());

    for (term, list) in engine.index().iter() {
        let loaded = reader.posting_list(term).unwrap().unwrap();
        assert_eq!(loaded.as_ref(), list, "term {}", term);
    }
    assert_eq!(reader.total_doc_count(), engine.index().total_docs_count());
}

// ============================================================================
// Writer behavior
// ============================================================================

#[test]
fn test_writer_creates_missing_directory() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("nested").join("index");

    let mut indexer = Indexer::new(TokenizerKind::English.build());
    indexer.build_from_text(DocumentId::new(0), "hello world").unwrap();
    IndexWriter::new(&dir).flush(indexer.index()).unwrap();

    assert!(dir.join("hello").is_file());
    assert!(dir.join("_0.dc").is_file());
}

#[test]
fn test_reindex_into_same_directory_drops_old_terms() {
    let tmp = TempDir::new().unwrap();

    let mut first = engine_at(tmp.path());
    first.add_text("a.txt", "zebra stripes").unwrap();
    first.flush().unwrap();

    let mut second = engine_at(tmp.path());
    second.add_text("b.txt", "hello world").unwrap();
    second.flush().unwrap();

    let reader = second.open_reader();
    assert!(reader.posting_list("zebra").unwrap().is_none());
    assert!(second.search("zebra", 10, &reader).unwrap().is_empty());

    let hits = second.search("hello", 10, &reader).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "b.txt");
}

#[test]
fn test_flush_empty_index() {
    let tmp = TempDir::new().unwrap();
    IndexWriter::new(tmp.path()).flush(&Index::new()).unwrap();

    let reader = IndexReader::new(tmp.path());
    assert_eq!(reader.total_doc_count(), 0);
    assert!(reader.posting_list("anything").unwrap().is_none());
}

#[test]
fn test_flush_into_file_path_fails() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("not-a-dir");
    fs::write(&file, b"x").unwrap();

    let mut indexer = Indexer::new(TokenizerKind::English.build());
    indexer.build_from_text(DocumentId::new(0), "hello").unwrap();

    let err = IndexWriter::new(&file).flush(indexer.index()).unwrap_err();
    assert!(matches!(err, Error::Persistence { .. }));
}

// ============================================================================
// Reader robustness
// ============================================================================

#[test]
fn test_reader_on_missing_directory() {
    let tmp = TempDir::new().unwrap();
    let reader = IndexReader::new(tmp.path().join("absent"));
    assert_eq!(reader.total_doc_count(), 0);
    assert!(reader.posting_list("sir").unwrap().is_none());
}

#[test]
fn test_corrupt_posting_file_treated_as_absent() {
    let (tmp, engine) = flushed_engine(&COLLECTION);
    fs::write(tmp.path().join("quarrel"), b"{not json").unwrap();

    let reader = engine.open_reader();
    assert!(reader.posting_list("quarrel").unwrap().is_none());

    // The corrupt term drops out of the query; "sir" alone still matches
    let hits = engine.search("quarrel sir", 10, &reader).unwrap();
    assert_eq!(hits.len(), 3);
}

#[test]
fn test_inconsistent_term_frequency_rejected() {
    let (tmp, engine) = flushed_engine(&COLLECTION);
    fs::write(
        tmp.path().join("better"),
        br#"[{"docID":2,"positions":[1],"termFrequency":5}]"#,
    )
    .unwrap();

    let reader = engine.open_reader();
    assert!(reader.posting_list("better").unwrap().is_none());
}

#[test]
fn test_path_like_terms_are_absent() {
    let (_tmp, engine) = flushed_engine(&COLLECTION);
    let reader = engine.open_reader();

    assert!(reader.posting_list("../sir").unwrap().is_none());
    assert!(reader.posting_list("..").unwrap().is_none());
    assert!(reader.posting_list("").unwrap().is_none());
}

#[test]
fn test_reader_caches_loaded_lists() {
    let (tmp, engine) = flushed_engine(&COLLECTION);
    let reader = engine.open_reader();

    let first = reader.posting_list("sir").unwrap().unwrap();
    assert_eq!(reader.cached_terms(), 1);

    // Removing the file does not affect an already cached list
    fs::remove_file(tmp.path().join("sir")).unwrap();
    let second = reader.posting_list("sir").unwrap().unwrap();
    assert!(std::sync::Arc::ptr_eq(&first, &second));
}
