//! Multi-term AND search
//!
//! Resolves each query term to a posting list, intersects the lists with
//! cursors, scores every document present in all of them, and returns the
//! top `k` by descending score.
//!
//! # Intersection
//!
//! Lists are ordered shortest first and the shortest list's cursor drives.
//! Each round, every other cursor skips to the driver's document. The first
//! cursor that lands past it sends the driver forward to that document and
//! the round restarts. When all cursors agree, the document matches and the
//! driver advances by one. Any cursor running out ends the intersection.

use crate::scorer::{Scorer, TfIdfScorer};
use deltasearch_core::{DocumentId, Result};
use deltasearch_index::{Cursor, PostingList};
use deltasearch_storage::IndexReader;
use std::fmt;

// ============================================================================
// Results
// ============================================================================

/// One ranked document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreDoc {
    /// Matched document
    pub doc_id: DocumentId,
    /// Relevance score (higher = more relevant)
    pub score: f64,
}

impl fmt::Display for ScoreDoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "docId: {}, score: {}", self.doc_id, self.score)
    }
}

/// Ranked search output
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopDocs {
    /// Number of matching documents before truncation to `k`
    pub total_hits: usize,
    /// At most `k` matches, by descending score then ascending document id
    pub score_docs: Vec<ScoreDoc>,
}

impl fmt::Display for TopDocs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "total hits: {}", self.total_hits)?;
        for doc in &self.score_docs {
            writeln!(f, "  {}", doc)?;
        }
        Ok(())
    }
}

// ============================================================================
// Intersection
// ============================================================================

/// Walk `cursors` to every document present in all of them
///
/// `cursors[0]` drives; callers put the shortest list first. `on_match`
/// sees every cursor positioned on the matched document.
fn for_each_match<F>(cursors: &mut [Cursor<'_>], mut on_match: F) -> Result<()>
where
    F: FnMut(DocumentId, &[Cursor<'_>]) -> Result<()>,
{
    if cursors.is_empty() {
        return Ok(());
    }

    while !cursors[0].is_exhausted() {
        let target = cursors[0].current_doc_id()?;

        let mut ahead = None;
        for cursor in cursors[1..].iter_mut() {
            cursor.skip_to(target);
            if cursor.is_exhausted() {
                return Ok(());
            }
            let doc_id = cursor.current_doc_id()?;
            if doc_id != target {
                ahead = Some(doc_id);
                break;
            }
        }

        match ahead {
            Some(doc_id) => cursors[0].skip_to(doc_id),
            None => {
                on_match(target, cursors)?;
                cursors[0].advance();
            }
        }
    }
    Ok(())
}

/// Document ids present in every list, ascending
///
/// No lists means no matches.
pub fn intersect(lists: &[&PostingList]) -> Result<Vec<DocumentId>> {
    let mut sorted = lists.to_vec();
    sorted.sort_by_key(|list| list.len());

    let mut cursors: Vec<Cursor<'_>> = sorted.iter().map(|list| list.open_cursor()).collect();
    let mut matches = Vec::new();
    for_each_match(&mut cursors, |doc_id, _| {
        matches.push(doc_id);
        Ok(())
    })?;
    Ok(matches)
}

// ============================================================================
// Searcher
// ============================================================================

/// Runs AND queries against an `IndexReader`
pub struct Searcher<'r> {
    reader: &'r IndexReader,
    scorer: Box<dyn Scorer>,
}

impl<'r> Searcher<'r> {
    /// Create a searcher with the default TF-IDF scorer
    pub fn new(reader: &'r IndexReader) -> Self {
        Self::with_scorer(reader, Box::new(TfIdfScorer))
    }

    /// Create a searcher with a custom scorer
    pub fn with_scorer(reader: &'r IndexReader, scorer: Box<dyn Scorer>) -> Self {
        Searcher { reader, scorer }
    }

    /// Top `k` documents containing every resolvable query term
    ///
    /// Terms with no posting list are dropped from the query. If none
    /// resolve, the result is empty with `total_hits == 0`.
    ///
    /// # Errors
    ///
    /// Propagates `Persistence` errors from loading posting lists.
    pub fn search_top_k<S: AsRef<str>>(&self, query: &[S], k: usize) -> Result<TopDocs> {
        let mut results = self.search(query)?;

        results.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.doc_id.cmp(&b.doc_id))
        });

        let total_hits = results.len();
        results.truncate(k);

        Ok(TopDocs {
            total_hits,
            score_docs: results,
        })
    }

    /// Every match with its score, in document order
    fn search<S: AsRef<str>>(&self, query: &[S]) -> Result<Vec<ScoreDoc>> {
        let mut lists = self.reader.posting_lists(query)?;
        if lists.len() < query.len() {
            tracing::debug!(
                target: "deltasearch::search",
                requested = query.len(),
                resolved = lists.len(),
                "Dropped query terms with no posting list"
            );
        }
        if lists.is_empty() {
            return Ok(Vec::new());
        }

        // Shortest list drives the intersection
        lists.sort_by_key(|list| list.len());

        let total_docs = self.reader.total_doc_count();
        let mut cursors: Vec<Cursor<'_>> = lists.iter().map(|list| list.open_cursor()).collect();

        let mut docs = Vec::new();
        for_each_match(&mut cursors, |doc_id, cursors| {
            let score = self.score(cursors, total_docs)?;
            docs.push(ScoreDoc { doc_id, score });
            Ok(())
        })?;

        tracing::debug!(
            target: "deltasearch::search",
            terms = lists.len(),
            matches = docs.len(),
            scorer = self.scorer.name(),
            "Query intersected"
        );
        Ok(docs)
    }

    fn score(&self, cursors: &[Cursor<'_>], total_docs: u64) -> Result<f64> {
        let mut score = 0.0;
        for cursor in cursors {
            let posting = cursor.current_posting()?;
            score += self.scorer.term_score(
                posting.term_frequency(),
                cursor.posting_list().len(),
                total_docs,
            );
        }
        Ok(score)
    }
}
