//! Convenient re-exports of commonly used types from docstore.
//!
//! ```ignore
//! use docstore::prelude::*;
//! ```

pub use docstore_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    document::{Author, Document, DocumentExt},
    error::{DocumentStoreError, DocumentStoreResult},
    id::{IdGenerator, UuidGenerator},
    query::{CriteriaVisitor, SearchCriteria, SearchCriteriaBuilder},
    store::DocumentStore,
};
