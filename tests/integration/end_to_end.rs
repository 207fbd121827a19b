//! Indexing, flushing, and querying through the Engine facade.

use crate::common::*;
use deltasearch::{DocumentId, Searcher};

// ============================================================================
// Conjunctive matching and ranking
// ============================================================================

#[test]
fn test_and_query_ranks_by_tf_idf() {
    let (_tmp, engine) = flushed_engine(&COLLECTION);
    let reader = engine.open_reader();

    let hits = engine.search("quarrel sir", 10, &reader).unwrap();
    let ids: Vec<u64> = hits.iter().map(|h| h.doc_id.as_u64()).collect();
    assert_eq!(ids, vec![1, 0]);

    // idf(quarrel) = log2(4/2) = 1, idf(sir) = log2(4/3)
    let idf_sir = (4.0f64 / 3.0).log2();
    assert!((hits[0].score - (1.0 + 2.0 * idf_sir)).abs() < 1e-9);
    assert!((hits[1].score - (1.0 + idf_sir)).abs() < 1e-9);
    assert_eq!(hits[0].title, "reply");
}

#[test]
fn test_every_hit_contains_every_term() {
    let (_tmp, engine) = flushed_engine(&COLLECTION);
    let reader = engine.open_reader();

    for hit in engine.search("no sir", 10, &reader).unwrap() {
        let text = COLLECTION[hit.doc_id.as_u64() as usize].1.to_lowercase();
        assert!(text.contains("no"));
        assert!(text.contains("sir"));
    }
}

#[test]
fn test_query_normalized_like_documents() {
    let (_tmp, engine) = flushed_engine(&COLLECTION);
    let reader = engine.open_reader();

    let plain = engine.search("well sir", 10, &reader).unwrap();
    let noisy = engine.search("  WELL,   Sir!! ", 10, &reader).unwrap();
    assert_eq!(plain, noisy);
    assert_eq!(plain.len(), 1);
    assert_eq!(plain[0].doc_id, DocumentId::new(3));
}

// ============================================================================
// Missing terms and degenerate queries
// ============================================================================

#[test]
fn test_unknown_terms_are_dropped() {
    let (_tmp, engine) = flushed_engine(&COLLECTION);
    let reader = engine.open_reader();

    let with_unknown = engine.search("quarrel zebra sir", 10, &reader).unwrap();
    let without = engine.search("quarrel sir", 10, &reader).unwrap();
    assert_eq!(with_unknown, without);
}

#[test]
fn test_all_unknown_terms_yield_nothing() {
    let (_tmp, engine) = flushed_engine(&COLLECTION);
    let reader = engine.open_reader();
    assert!(engine.search("zebra giraffe", 10, &reader).unwrap().is_empty());
}

#[test]
fn test_empty_query_yields_nothing() {
    let (_tmp, engine) = flushed_engine(&COLLECTION);
    let reader = engine.open_reader();
    assert!(engine.search("", 10, &reader).unwrap().is_empty());
    assert!(engine.search(" ,.! ", 10, &reader).unwrap().is_empty());
}

// ============================================================================
// Top-k
// ============================================================================

#[test]
fn test_top_k_truncates_but_counts_all_hits() {
    let (_tmp, engine) = flushed_engine(&COLLECTION);
    let reader = engine.open_reader();

    let top = Searcher::new(&reader).search_top_k(&["sir"], 2).unwrap();
    assert_eq!(top.total_hits, 3);
    assert_eq!(top.score_docs.len(), 2);
    assert!(top.score_docs[0].score >= top.score_docs[1].score);

    let hits = engine.search("sir", 0, &reader).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn test_equal_scores_break_ties_by_doc_id() {
    let docs = [("a", "alpha beta"), ("b", "beta alpha"), ("c", "gamma")];
    let (_tmp, engine) = flushed_engine(&docs);
    let reader = engine.open_reader();

    let hits = engine.search("alpha beta", 10, &reader).unwrap();
    let ids: Vec<u64> = hits.iter().map(|h| h.doc_id.as_u64()).collect();
    assert_eq!(ids, vec![0, 1]);
    assert_eq!(hits[0].score, hits[1].score);
}

// ============================================================================
// Re-flush
// ============================================================================

#[test]
fn test_reflush_visible_to_new_reader() {
    let (_tmp, mut engine) = flushed_engine(&COLLECTION[..2]);
    assert_eq!(engine.open_reader().total_doc_count(), 2);

    for (title, text) in &COLLECTION[2..] {
        engine.add_text(title, text).unwrap();
    }
    engine.flush().unwrap();

    let reader = engine.open_reader();
    assert_eq!(reader.total_doc_count(), 4);
    let hits = engine.search("sir", 10, &reader).unwrap();
    assert_eq!(hits.len(), 3);
}

#[test]
fn test_documents_without_terms_still_counted() {
    let docs = [("blank", ""), ("punct", "?!,"), ("word", "hello")];
    let (_tmp, engine) = flushed_engine(&docs);
    let reader = engine.open_reader();

    assert_eq!(engine.index().total_docs_count(), 3);
    assert_eq!(reader.total_doc_count(), 3);

    let hits = engine.search("hello", 10, &reader).unwrap();
    assert_eq!(hits.len(), 1);
    assert!((hits[0].score - 3.0f64.log2()).abs() < 1e-9);
}
