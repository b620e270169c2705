//! A small in-memory document repository with upsert and multi-criteria search.
//!
//! This crate is the core of the docstore project and provides:
//!
//! - **Document types** ([`document`]) - The [`Document`](document::Document) and [`Author`](document::Author) values and JSON helpers
//! - **Search criteria** ([`query`]) - Criteria construction and the visitor backends evaluate them with
//! - **Store backend abstraction** ([`backend`]) - Traits for implementing storage backends
//! - **Document store** ([`store`]) - The upsert, lookup and search interface
//! - **Identifier generation** ([`id`]) - Pluggable identifiers for documents saved without one
//! - **Error handling** ([`error`]) - Error and result types
//!
//! # Example
//!
//! ```ignore
//! use docstore::prelude::*;
//! use docstore::memory::InMemoryStore;
//!
//! let mut store = DocumentStore::new(InMemoryStore::new());
//! store.save(
//!     Document::new()
//!         .with_id("doc3")
//!         .with_title("Java Streams")
//!         .with_author(Author::new("author1", "Author One")),
//! );
//!
//! let hits = store.search(&SearchCriteria::builder().title_prefixes(["Java"]).build());
//! assert_eq!(hits.len(), 1);
//! ```

pub mod backend;
pub mod document;
pub mod error;
pub mod id;
pub mod query;
pub mod store;
