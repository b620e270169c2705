//! In-memory storage implementation for document stores.
//!
//! This module provides a simple backend that keeps documents in a `HashMap`
//! keyed by their identifier.

use std::collections::HashMap;
use tracing::trace;

use docstore_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    document::Document,
    error::DocumentStoreResult,
    query::SearchCriteria,
};

use crate::evaluator::CriteriaEvaluator;

type DocumentMap = HashMap<String, Document>;


/// In-memory document storage backend.
///
/// This struct implements the [`StoreBackend`] trait over a single map from document
/// identifier to document. It does no locking of its own; share it across threads by
/// wrapping the owning [`DocumentStore`](docstore_core::store::DocumentStore) in a lock.
///
/// # Performance
///
/// Searches scan every stored document (no indexing).
///
/// # Example
///
/// ```ignore
/// use docstore_memory::InMemoryStore;
/// use docstore_core::{backend::StoreBackend, document::Document};
///
/// let mut store = InMemoryStore::new();
/// store.put_document("doc1".to_string(), Document::new().with_id("doc1"));
///
/// assert!(store.contains_document("doc1"));
/// ```
#[derive(Default, Clone, Debug)]
pub struct InMemoryStore {
    /// document_id -> document
    documents: DocumentMap,
}

impl InMemoryStore {
    /// Creates a new empty in-memory document store.
    pub fn new() -> Self {
        Self {
            documents: DocumentMap::new(),
        }
    }

    /// Creates a new empty store with room for at least `capacity` documents.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            documents: DocumentMap::with_capacity(capacity),
        }
    }

    /// Creates a builder for constructing an `InMemoryStore` with custom options.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use docstore_memory::InMemoryStore;
    /// use docstore_core::backend::StoreBackendBuilder;
    ///
    /// let store = InMemoryStore::builder().capacity(1024).build().unwrap();
    /// ```
    pub fn builder() -> InMemoryStoreBuilder {
        InMemoryStoreBuilder::default()
    }
}


impl StoreBackend for InMemoryStore {
    fn get_document(&self, id: &str) -> Option<Document> {
        self.documents
            .get(id)
            .cloned()
    }

    fn contains_document(&self, id: &str) -> bool {
        self.documents.contains_key(id)
    }

    fn put_document(&mut self, id: String, document: Document) {
        if self.documents.insert(id, document).is_some() {
            trace!("Replaced stored document");
        }
    }

    fn search_documents(&self, criteria: &SearchCriteria) -> Vec<Document> {
        if criteria.is_unconstrained() {
            return self.documents
                .values()
                .cloned()
                .collect();
        }

        CriteriaEvaluator::filter_documents(self.documents.values(), criteria)
    }

    fn count_documents(&self) -> usize {
        self.documents.len()
    }
}


/// Builder for constructing [`InMemoryStore`] instances.
///
/// # Example
///
/// ```ignore
/// use docstore_memory::InMemoryStore;
/// use docstore_core::backend::StoreBackendBuilder;
///
/// let store = InMemoryStore::builder().build().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStoreBuilder {
    capacity: Option<usize>,
}

impl InMemoryStoreBuilder {
    /// Pre-allocates room for `capacity` documents.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }
}

impl StoreBackendBuilder for InMemoryStoreBuilder {
    type Backend = InMemoryStore;

    /// Builds and returns a new [`InMemoryStore`] instance.
    ///
    /// This always succeeds and returns a freshly initialized store.
    fn build(self) -> DocumentStoreResult<Self::Backend> {
        Ok(match self.capacity {
            Some(capacity) => InMemoryStore::with_capacity(capacity),
            None => InMemoryStore::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docstore_core::document::Author;

    #[test]
    fn test_put_replaces_existing() {
        let mut store = InMemoryStore::new();

        store.put_document("doc1".into(), Document::new().with_id("doc1").with_title("v1"));
        store.put_document("doc1".into(), Document::new().with_id("doc1").with_title("v2"));

        assert_eq!(store.count_documents(), 1);
        assert_eq!(
            store.get_document("doc1").and_then(|doc| doc.title),
            Some("v2".to_string())
        );
    }

    #[test]
    fn test_get_missing_document() {
        let store = InMemoryStore::new();

        assert!(store.get_document("missing").is_none());
        assert!(!store.contains_document("missing"));
    }

    #[test]
    fn test_search_filters_by_author() {
        let mut store = InMemoryStore::new();
        store.put_document(
            "doc1".into(),
            Document::new().with_id("doc1").with_author(Author::new("author1", "Author One")),
        );
        store.put_document(
            "doc2".into(),
            Document::new().with_id("doc2").with_author(Author::new("author2", "Author Two")),
        );
        store.put_document("doc3".into(), Document::new().with_id("doc3"));

        let hits = store.search_documents(&SearchCriteria::builder().author_ids(["author2"]).build());

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id(), Some("doc2"));
        assert_eq!(store.search_documents(&SearchCriteria::new()).len(), 3);
    }

    #[test]
    fn test_builder_builds_empty_store() {
        let store = InMemoryStore::builder()
            .capacity(16)
            .build()
            .unwrap();

        assert_eq!(store.count_documents(), 0);
        assert!(store.documents.capacity() >= 16);
    }
}
