//! Identifier generation for documents saved without an identifier.

use std::fmt;
use uuid::Uuid;

/// Produces identifiers for documents that arrive without one.
///
/// Implementations must return identifiers that are unique among every identifier
/// the store has handed out. The store does not check for collisions.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh, non-empty identifier.
    fn generate(&self) -> String;
}

/// Generates random UUID v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

impl<F> IdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn generate(&self) -> String {
        self()
    }
}

impl fmt::Debug for dyn IdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IdGenerator")
    }
}
