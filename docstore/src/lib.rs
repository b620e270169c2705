//! Main docstore crate providing a unified interface for in-memory document storage.
//!
//! This crate is the primary entry point for users of docstore. It re-exports the
//! core types from `docstore-core` and the in-memory backend from `docstore-memory`.
//!
//! # Features
//!
//! - **Upsert** - Documents without an identifier get a generated one; updates keep the stored creation timestamp
//! - **Lookup** - Retrieve a document by identifier
//! - **Multi-criteria search** - Title prefixes, content substrings, author identifiers and a creation window
//!
//! # Quick Start
//!
//! ```ignore
//! use docstore::{prelude::*, memory::InMemoryStore};
//! use docstore::chrono::{Duration, Utc};
//!
//! fn main() {
//!     let mut store = DocumentStore::new(InMemoryStore::new());
//!     let author = Author::new("author1", "Author One");
//!
//!     store.save(
//!         Document::new()
//!             .with_id("doc3")
//!             .with_title("Java Streams")
//!             .with_content("Streams are a new abstraction.")
//!             .with_author(author)
//!             .with_created(Utc::now() - Duration::minutes(30)),
//!     );
//!
//!     let results = store.search(
//!         &SearchCriteria::builder()
//!             .title_prefixes(["Java"])
//!             .author_ids(["author1"])
//!             .created_from(Utc::now() - Duration::hours(1))
//!             .build(),
//!     );
//!
//!     println!("Matching documents: {:?}", results);
//! }
//! ```
//!
//! # Backends
//!
//! - [`memory`] - `HashMap`-backed storage

pub mod prelude;

pub use docstore_core::{backend, document, error, id, query, store};

// Re-export chrono so callers can build timestamps without a direct dependency
pub use chrono;

/// In-memory storage backend implementations.
pub mod memory {
    pub use docstore_memory::{InMemoryStore, InMemoryStoreBuilder};
}
