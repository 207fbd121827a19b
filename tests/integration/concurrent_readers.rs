//! Shared readers across threads and randomized agreement checks.

use crate::common::*;
use deltasearch::{IndexReader, Searcher};
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;

#[test]
fn test_shared_reader_across_threads() {
    let (_tmp, engine) = flushed_engine(&COLLECTION);
    let reader = Arc::new(engine.open_reader());
    let expected = Searcher::new(&reader).search_top_k(&["sir"], 10).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let reader = Arc::clone(&reader);
            thread::spawn(move || Searcher::new(&reader).search_top_k(&["sir"], 10).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
    assert_eq!(reader.cached_terms(), 1);
}

const VOCABULARY: [&str; 8] = [
    "apple", "banana", "cherry", "date", "elder", "fig", "grape", "honeydew",
];

fn arb_collection() -> impl Strategy<Value = Vec<Vec<usize>>> {
    prop::collection::vec(prop::collection::vec(0..VOCABULARY.len(), 0..12), 1..60)
}

fn arb_query() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..VOCABULARY.len(), 1..4)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_matches_agree_with_naive_scan(docs in arb_collection(), query in arb_query()) {
        let texts: Vec<String> = docs
            .iter()
            .map(|words| words.iter().map(|&w| VOCABULARY[w]).collect::<Vec<_>>().join(" "))
            .collect();
        let collection: Vec<(&str, &str)> = texts.iter().map(|t| ("doc", t.as_str())).collect();
        let (tmp, _engine) = flushed_engine(&collection);

        let reader = IndexReader::new(tmp.path());
        let terms: Vec<&str> = query.iter().map(|&w| VOCABULARY[w]).collect();
        let top = Searcher::new(&reader).search_top_k(&terms, usize::MAX).unwrap();

        // Terms absent from every document are dropped from the query
        let present: Vec<usize> = query
            .iter()
            .copied()
            .filter(|w| docs.iter().any(|d| d.contains(w)))
            .collect();
        let expected: BTreeSet<u64> = if present.is_empty() {
            BTreeSet::new()
        } else {
            docs.iter()
                .enumerate()
                .filter(|(_, d)| present.iter().all(|w| d.contains(w)))
                .map(|(i, _)| i as u64)
                .collect()
        };
        let got: BTreeSet<u64> = top.score_docs.iter().map(|d| d.doc_id.as_u64()).collect();

        prop_assert_eq!(top.total_hits, expected.len());
        prop_assert_eq!(got, expected);
        prop_assert_eq!(reader.total_doc_count(), docs.len() as u64);
    }
}
