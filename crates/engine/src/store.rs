//! Document store: assigns document ids and resolves them to titles

use deltasearch_core::{DocumentId, Error, Result};
use parking_lot::RwLock;

/// Maps document ids to titles and hands out new ids
///
/// Ids must increase in save order; the indexer depends on it.
pub trait DocumentStore: Send + Sync {
    /// Record a title and return its newly assigned id
    fn save(&self, title: &str) -> Result<DocumentId>;

    /// Title recorded for `id`
    ///
    /// # Errors
    ///
    /// `DocumentNotFound` if `id` was never assigned.
    fn fetch_title(&self, id: DocumentId) -> Result<String>;
}

/// In-memory store assigning ids `0, 1, 2, ...`
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    titles: RwLock<Vec<String>>,
}

impl MemoryDocumentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of saved documents
    pub fn len(&self) -> usize {
        self.titles.read().len()
    }

    /// True if nothing has been saved
    pub fn is_empty(&self) -> bool {
        self.titles.read().is_empty()
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn save(&self, title: &str) -> Result<DocumentId> {
        let mut titles = self.titles.write();
        let id = DocumentId::new(titles.len() as u64);
        titles.push(title.to_string());
        Ok(id)
    }

    fn fetch_title(&self, id: DocumentId) -> Result<String> {
        let titles = self.titles.read();
        usize::try_from(id.as_u64())
            .ok()
            .and_then(|i| titles.get(i))
            .cloned()
            .ok_or(Error::DocumentNotFound(id))
    }
}
