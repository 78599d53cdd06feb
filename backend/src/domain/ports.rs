//! Domain ports defining the edges of the hexagon.
//!
//! The catalog facade only sees [`BookRepository`]; the in-memory adapter in
//! `outbound::memory` is the sole implementation in this service. The port
//! exposes a strongly typed error so adapters map failures into predictable
//! variants.

use std::collections::HashMap;

use thiserror::Error;

use super::{Book, BookId};

/// Failures raised by catalog storage.
///
/// The `Display` rendering is the wire detail string and must stay stable:
/// clients match on `id:<id>` and `title:<title>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No record exists under the addressed identifier.
    #[error("id:{id}")]
    NotFound {
        /// Identifier that was addressed.
        id: BookId,
    },
    /// A distinct record already holds the candidate title.
    #[error("title:{title}")]
    Duplicate {
        /// Title that collided.
        title: String,
    },
}

impl CatalogError {
    /// Helper for missing-record failures.
    #[must_use]
    pub fn not_found(id: BookId) -> Self {
        Self::NotFound { id }
    }

    /// Helper for title collisions.
    pub fn duplicate(title: impl Into<String>) -> Self {
        Self::Duplicate {
            title: title.into(),
        }
    }
}

/// Port through which the catalog reaches its storage adapter.
///
/// Absence on `get` is a non-error outcome; only `save` and `remove` fail.
/// Every returned [`Book`] is a copy, never a live stored record.
pub trait BookRepository: Send + Sync {
    /// Fetch one record by identifier.
    fn get(&self, id: BookId) -> Option<Book>;

    /// All records, ordered by id ascending.
    fn find_all(&self) -> Vec<Book>;

    /// Records matching every supplied field exactly; see
    /// [`crate::domain::query::matches_condition`] for the field semantics.
    fn find_by_condition(&self, condition: &HashMap<String, String>) -> Vec<Book>;

    /// Records whose author starts with `prefix` (case-sensitive), ordered by
    /// id ascending.
    fn find_by_author_prefix(&self, prefix: &str) -> Vec<Book>;

    /// Insert (`id` absent) or replace (`id` present) a record.
    ///
    /// # Errors
    /// [`CatalogError::Duplicate`] when a distinct record holds the same
    /// title; [`CatalogError::NotFound`] when updating an unknown id.
    fn save(&self, book: Book) -> Result<Book, CatalogError>;

    /// Delete a record.
    ///
    /// # Errors
    /// [`CatalogError::NotFound`] when the id is not stored.
    fn remove(&self, id: BookId) -> Result<(), CatalogError>;
}
