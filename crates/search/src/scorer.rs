//! Scoring infrastructure for deltasearch
//!
//! This module provides:
//! - Scorer trait for pluggable per-term scoring
//! - TfIdfScorer default implementation
//! - `tf` / `idf` component functions
//!
//! A matched document's score is the sum of `term_score` over every query
//! term that resolved to a posting list.

// ============================================================================
// Scorer Trait
// ============================================================================

/// Pluggable scoring interface
///
/// Higher scores indicate more relevant documents. Scores are not
/// normalized.
///
/// # Thread Safety
///
/// Scorers must be Send + Sync for concurrent search operations.
pub trait Scorer: Send + Sync {
    /// Contribution of one query term to a matched document's score
    ///
    /// - `term_frequency`: occurrences of the term in the document
    /// - `doc_freq`: number of documents in the term's posting list
    /// - `total_docs`: number of documents in the index
    fn term_score(&self, term_frequency: u64, doc_freq: usize, total_docs: u64) -> f64;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

// ============================================================================
// TF-IDF
// ============================================================================

/// Log-scaled term frequency: `log2(f) + 1`, or 0 when `f == 0`
pub fn tf(term_frequency: u64) -> f64 {
    if term_frequency == 0 {
        return 0.0;
    }
    (term_frequency as f64).log2() + 1.0
}

/// Inverse document frequency: `log2(N / df)`
///
/// Returns 0 when either count is 0, where the formula is undefined.
pub fn idf(total_docs: u64, doc_freq: usize) -> f64 {
    if total_docs == 0 || doc_freq == 0 {
        return 0.0;
    }
    (total_docs as f64 / doc_freq as f64).log2()
}

/// TF-IDF scorer: `tf(f) * idf(N, df)` per term
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfScorer;

impl Scorer for TfIdfScorer {
    fn term_score(&self, term_frequency: u64, doc_freq: usize, total_docs: u64) -> f64 {
        tf(term_frequency) * idf(total_docs, doc_freq)
    }

    fn name(&self) -> &str {
        "tf-idf"
    }
}
