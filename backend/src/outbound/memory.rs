//! In-memory catalog storage adapter.
//!
//! The map is the single authority over stored records. A [`RwLock`] guards
//! it: reads clone under the read guard and observe a consistent per-call
//! snapshot, while `save` and `remove` hold the write guard across the whole
//! check-then-mutate sequence, so two concurrent creates can neither pass the
//! duplicate check together nor be assigned the same identifier. `BTreeMap`
//! keeps iteration in ascending id order for the list operations.

use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::domain::ports::{BookRepository, CatalogError};
use crate::domain::query::{matches_author_prefix, matches_condition};
use crate::domain::{Book, BookId};

/// Identifier assigned to the first record of an otherwise empty catalog.
///
/// The id sequence is `max(existing ids) + 1`; this constant pins down the
/// starting point that rule leaves open when nothing is stored yet.
const FIRST_BOOK_ID: BookId = 1;

/// Map-backed [`BookRepository`] implementation.
pub struct InMemoryBookRepository {
    books: RwLock<BTreeMap<BookId, Book>>,
}

impl InMemoryBookRepository {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            books: RwLock::new(BTreeMap::new()),
        }
    }

    /// Create a catalog preloaded with the reference seed records.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_books([
            Book::new("燃えよ剣", Some("司馬遼太郎".to_owned()), None).with_id(1),
            Book::new("峠", Some("司馬遼太郎".to_owned()), None).with_id(2),
            Book::new("ノルウェーの森", Some("村上春樹".to_owned()), None).with_id(3),
        ])
    }

    /// Create a catalog from records that already carry identifiers.
    ///
    /// Intended for seeding and tests; records without an id are skipped.
    #[must_use]
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let map = books
            .into_iter()
            .filter_map(|book| book.id.map(|id| (id, book)))
            .collect();
        Self {
            books: RwLock::new(map),
        }
    }

    // A poisoned lock only means another thread panicked while holding the
    // guard; the map itself is still coherent because no mutation path can
    // panic between check and insert. Recover the guard rather than unwinding.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<BookId, Book>> {
        self.books.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<BookId, Book>> {
        self.books.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn insert(books: &mut BTreeMap<BookId, Book>, book: Book) -> Result<Book, CatalogError> {
        let has_duplicate = books
            .values()
            .any(|existing| existing.duplicates_title_of(&book));
        if has_duplicate {
            return Err(CatalogError::duplicate(book.title));
        }
        let next_id = books
            .last_key_value()
            .map_or(FIRST_BOOK_ID, |(max_id, _)| max_id + 1);
        let book = book.with_id(next_id);
        books.insert(next_id, book.clone());
        debug!(id = next_id, "book inserted");
        Ok(book)
    }

    fn replace(
        books: &mut BTreeMap<BookId, Book>,
        id: BookId,
        book: Book,
    ) -> Result<Book, CatalogError> {
        if !books.contains_key(&id) {
            return Err(CatalogError::not_found(id));
        }
        let has_duplicate = books
            .values()
            .any(|existing| existing.duplicates_title_of(&book));
        if has_duplicate {
            return Err(CatalogError::duplicate(book.title));
        }
        books.insert(id, book.clone());
        debug!(id, "book replaced");
        Ok(book)
    }
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BookRepository for InMemoryBookRepository {
    fn get(&self, id: BookId) -> Option<Book> {
        self.read().get(&id).cloned()
    }

    fn find_all(&self) -> Vec<Book> {
        self.read().values().cloned().collect()
    }

    fn find_by_condition(&self, condition: &HashMap<String, String>) -> Vec<Book> {
        self.read()
            .values()
            .filter(|book| matches_condition(book, condition))
            .cloned()
            .collect()
    }

    fn find_by_author_prefix(&self, prefix: &str) -> Vec<Book> {
        self.read()
            .values()
            .filter(|book| matches_author_prefix(book, prefix))
            .cloned()
            .collect()
    }

    fn save(&self, book: Book) -> Result<Book, CatalogError> {
        let mut books = self.write();
        match book.id {
            Some(id) => Self::replace(&mut books, id, book),
            None => Self::insert(&mut books, book),
        }
    }

    fn remove(&self, id: BookId) -> Result<(), CatalogError> {
        let mut books = self.write();
        if books.remove(&id).is_none() {
            return Err(CatalogError::not_found(id));
        }
        debug!(id, "book deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
