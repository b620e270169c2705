//! Core types for document representation and serialization.
//!
//! This module provides the [`Document`] and [`Author`] value types held by a
//! document store, as well as utilities for converting them to and from JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Value, from_value, to_value};

use crate::error::DocumentStoreResult;

/// The author of a document.
///
/// Authors are plain values: they are built once and never mutated by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    /// Unique identifier of the author, matched exactly by author searches.
    pub id: String,
    /// Display name of the author.
    pub name: String,
}

impl Author {
    /// Creates a new author.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A document held by a document store.
///
/// Every field is optional. A document without an identifier (or with an empty one)
/// receives a generated identifier when it is saved. Once a document is stored, its
/// `created` timestamp is owned by the store: later saves of the same identifier keep
/// the stored value regardless of what they carry.
///
/// # Example
///
/// ```ignore
/// use docstore::document::{Author, Document};
/// use chrono::Utc;
///
/// let doc = Document::new()
///     .with_title("Java Streams")
///     .with_content("Streams are a new abstraction.")
///     .with_author(Author::new("author1", "Author One"))
///     .with_created(Utc::now());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The document identifier. `None` and `Some("")` both mean "unassigned".
    #[serde(default)]
    pub id: Option<String>,
    /// The document title, matched by prefix.
    #[serde(default)]
    pub title: Option<String>,
    /// The document body, matched by substring.
    #[serde(default)]
    pub content: Option<String>,
    /// The document author, matched by author identifier.
    #[serde(default)]
    pub author: Option<Author>,
    /// When the document was first created.
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

impl Document {
    /// Creates an empty document with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the author.
    pub fn with_author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    /// Sets the creation timestamp.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Returns the identifier if it is set and non-empty.
    pub fn id(&self) -> Option<&str> {
        self.id
            .as_deref()
            .filter(|id| !id.is_empty())
    }

    /// Returns `true` if the document carries a usable identifier.
    pub fn has_id(&self) -> bool {
        self.id().is_some()
    }
}

/// Extension trait providing JSON conversion utilities.
///
/// This trait is automatically implemented for every serde-compatible type, which
/// covers [`Document`], [`Author`] and [`SearchCriteria`](crate::query::SearchCriteria).
pub trait DocumentExt: Sized {
    /// Converts this value to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn to_json(&self) -> DocumentStoreResult<Value>;

    /// Creates a value from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or the structure is invalid.
    fn from_json(value: Value) -> DocumentStoreResult<Self>;
}

impl<T: Serialize + DeserializeOwned> DocumentExt for T {
    fn to_json(&self) -> DocumentStoreResult<Value> {
        Ok(to_value(self)?)
    }

    fn from_json(value: Value) -> DocumentStoreResult<Self> {
        Ok(from_value(value)?)
    }
}
