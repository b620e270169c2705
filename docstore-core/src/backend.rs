//! Storage backend abstraction for document stores.
//!
//! A backend owns the identifier-to-document mapping and knows how to evaluate
//! [`SearchCriteria`] against whatever representation it keeps. Backends do not
//! apply the upsert rules; [`DocumentStore`](crate::store::DocumentStore) does that
//! on top of them.
//!
//! # Implementing a Backend
//!
//! ```ignore
//! use docstore::backend::StoreBackend;
//! use docstore::document::Document;
//! use docstore::query::SearchCriteria;
//!
//! #[derive(Default)]
//! struct VecStore(Vec<(String, Document)>);
//!
//! impl StoreBackend for VecStore {
//!     fn get_document(&self, id: &str) -> Option<Document> {
//!         self.0.iter().find(|(key, _)| key == id).map(|(_, doc)| doc.clone())
//!     }
//!     // ...
//! }
//! ```

use crate::{document::Document, error::DocumentStoreResult, query::SearchCriteria};

/// Core trait for document storage backends.
pub trait StoreBackend {
    /// Returns a copy of the document stored under `id`, if any.
    fn get_document(&self, id: &str) -> Option<Document>;

    /// Returns `true` if a document is stored under `id`.
    fn contains_document(&self, id: &str) -> bool {
        self.get_document(id).is_some()
    }

    /// Stores `document` under `id`, replacing any previous document.
    fn put_document(&mut self, id: String, document: Document);

    /// Returns every stored document matching `criteria`, in no particular order.
    fn search_documents(&self, criteria: &SearchCriteria) -> Vec<Document>;

    /// Returns the number of stored documents.
    fn count_documents(&self) -> usize;
}

/// Builder trait for constructing backend instances.
pub trait StoreBackendBuilder {
    /// The backend type produced by this builder.
    type Backend: StoreBackend;

    /// Builds and returns a new backend instance.
    ///
    /// # Errors
    ///
    /// Returns an error if backend initialization fails.
    fn build(self) -> DocumentStoreResult<Self::Backend>;
}
