//! In-memory document storage backend for docstore.
//!
//! This crate provides a `HashMap`-backed implementation of the `StoreBackend` trait.
//! It is single-threaded by design and scans every document on search.
//!
//! # Quick Start
//!
//! ```ignore
//! use docstore::{prelude::*, memory::InMemoryStore};
//!
//! fn main() -> DocumentStoreResult<()> {
//!     let backend = InMemoryStore::builder().build()?;
//!     let mut store = DocumentStore::new(backend);
//!
//!     let saved = store.save(
//!         Document::new()
//!             .with_title("Introduction to Java")
//!             .with_author(Author::new("author1", "Author One")),
//!     );
//!
//!     assert!(store.find_by_id(saved.id().unwrap()).is_some());
//!
//!     Ok(())
//! }
//! ```

pub mod store;
pub mod evaluator;

pub use store::{InMemoryStore, InMemoryStoreBuilder};
