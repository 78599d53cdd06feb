//! Catalog facade exposed to inbound adapters.
//!
//! Pure delegation: the facade holds the repository port, forwards each
//! logical operation, and lets store failures propagate unchanged. Field
//! validation runs in the HTTP adapter before any of these methods is called.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use super::ports::{BookRepository, CatalogError};
use super::{Book, BookId};

/// Use-case surface for catalog CRUD and searches.
#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<dyn BookRepository>,
}

impl CatalogService {
    /// Wrap a repository port.
    #[must_use]
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }

    /// Fetch one record; absence is not an error here.
    #[must_use]
    pub fn get(&self, id: BookId) -> Option<Book> {
        self.repository.get(id)
    }

    /// All records, id ascending.
    #[must_use]
    pub fn list(&self) -> Vec<Book> {
        self.repository.find_all()
    }

    /// Exact field-match search.
    #[must_use]
    pub fn search(&self, condition: &HashMap<String, String>) -> Vec<Book> {
        self.repository.find_by_condition(condition)
    }

    /// Case-sensitive author prefix search.
    #[must_use]
    pub fn search_by_author_prefix(&self, prefix: &str) -> Vec<Book> {
        self.repository.find_by_author_prefix(prefix)
    }

    /// Insert a new record; the store assigns the identifier.
    ///
    /// # Errors
    /// [`CatalogError::Duplicate`] when the title is already held.
    pub fn add(&self, book: Book) -> Result<Book, CatalogError> {
        let stored = self.repository.save(book)?;
        info!(id = stored.id, title = %stored.title, "book added");
        Ok(stored)
    }

    /// Replace the record addressed by the candidate's identifier.
    ///
    /// # Errors
    /// [`CatalogError::NotFound`] for an unknown id,
    /// [`CatalogError::Duplicate`] when another record holds the title.
    pub fn update(&self, book: Book) -> Result<Book, CatalogError> {
        let stored = self.repository.save(book)?;
        info!(id = stored.id, title = %stored.title, "book updated");
        Ok(stored)
    }

    /// Delete a record.
    ///
    /// # Errors
    /// [`CatalogError::NotFound`] when the id is not stored.
    pub fn delete(&self, id: BookId) -> Result<(), CatalogError> {
        self.repository.remove(id)?;
        info!(id, "book removed");
        Ok(())
    }
}
