//! Main document store interface.
//!
//! [`DocumentStore`] wraps a [`StoreBackend`] and applies the upsert rules on top of
//! it:
//!
//! - a document without an identifier gets a freshly generated one;
//! - a document whose identifier is already stored replaces the stored copy but keeps
//!   the stored creation timestamp;
//! - any other document is stored as-is.
//!
//! # Example
//!
//! ```ignore
//! use docstore::prelude::*;
//! use docstore::memory::InMemoryStore;
//!
//! let mut store = DocumentStore::new(InMemoryStore::new());
//! let saved = store.save(Document::new().with_title("Java Streams"));
//!
//! assert!(saved.has_id());
//! assert_eq!(store.find_by_id(saved.id().unwrap()), Some(saved));
//! ```

use tracing::{debug, trace};

use crate::{
    backend::StoreBackend,
    document::Document,
    id::{IdGenerator, UuidGenerator},
    query::SearchCriteria,
};

/// A document store bound to a specific backend implementation.
///
/// # Type Parameters
///
/// * `B` - The backend implementation type
#[derive(Debug)]
pub struct DocumentStore<B: StoreBackend> {
    backend: B,
    id_generator: Box<dyn IdGenerator>,
}

impl<B: StoreBackend> DocumentStore<B> {
    /// Creates a new document store that assigns UUID v4 identifiers.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            id_generator: Box::new(UuidGenerator),
        }
    }

    /// Replaces the generator used for documents saved without an identifier.
    pub fn with_id_generator(mut self, id_generator: impl IdGenerator + 'static) -> Self {
        self.id_generator = Box::new(id_generator);
        self
    }

    /// Upserts a document and returns it as stored.
    ///
    /// If the document has no identifier (or an empty one) a new identifier is
    /// generated and assigned. If the identifier is already stored, the stored
    /// creation timestamp is copied onto the incoming document, whatever it carried,
    /// before it replaces the stored copy.
    pub fn save(&mut self, mut document: Document) -> Document {
        let id = match document.id() {
            Some(id) => {
                let id = id.to_string();

                match self.backend.get_document(&id) {
                    Some(existing) => {
                        debug!(id = %id, "Updating existing document");
                        document.created = existing.created;
                    }
                    None => debug!(id = %id, "Inserting document"),
                }

                id
            }
            None => {
                let id = self.id_generator.generate();
                debug!(id = %id, "Inserting document with generated id");

                document.id = Some(id.clone());
                id
            }
        };

        self.backend.put_document(id, document.clone());

        document
    }

    /// Returns the document stored under `id`, if any.
    pub fn find_by_id(&self, id: &str) -> Option<Document> {
        let document = self.backend.get_document(id);
        trace!(id = %id, found = document.is_some(), "Looked up document");

        document
    }

    /// Returns every stored document matching `criteria`.
    ///
    /// The order of the results is unspecified. No match yields an empty vector.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<Document> {
        let documents = self.backend.search_documents(criteria);
        debug!(
            matched = documents.len(),
            total = self.backend.count_documents(),
            "Searched documents"
        );

        documents
    }

    /// Returns the number of stored documents.
    pub fn len(&self) -> usize {
        self.backend.count_documents()
    }

    /// Returns `true` if nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Consumes the store and returns the underlying backend.
    pub fn into_backend(self) -> B {
        self.backend
    }
}
