//! Book aggregate and field validation.
//!
//! Purpose: define the catalog's only entity together with the field
//! constraints the HTTP adapter enforces before a record reaches the store.
//! Identifier assignment and title uniqueness are store invariants and live in
//! the repository adapter, not here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Identifier assigned by the catalog when a book is first stored.
pub type BookId = u32;

/// Maximum title length in characters.
pub const TITLE_MAX_CHARS: usize = 20;
/// Maximum author length in characters.
pub const AUTHOR_MAX_CHARS: usize = 20;

/// A catalog record.
///
/// `id` is absent until the store assigns one at insertion time and is
/// immutable afterwards. Callers always work with copies; the store never
/// hands out its own instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Store-assigned identifier; `None` before the first save.
    #[schema(example = 1)]
    pub id: Option<BookId>,
    /// Required title, 1 to 20 characters.
    #[schema(example = "燃えよ剣")]
    pub title: String,
    /// Optional author, at most 20 characters.
    #[schema(example = "司馬遼太郎")]
    pub author: Option<String>,
    /// Optional publication date; never in the future.
    #[schema(format = "date")]
    pub published: Option<NaiveDate>,
}

/// Field constraint violations detected before a book reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookValidationError {
    /// Title is empty or whitespace only.
    #[error("title must not be blank")]
    BlankTitle,
    /// Title exceeds [`TITLE_MAX_CHARS`].
    #[error("title must be at most {TITLE_MAX_CHARS} characters")]
    TitleTooLong,
    /// Author exceeds [`AUTHOR_MAX_CHARS`].
    #[error("author must be at most {AUTHOR_MAX_CHARS} characters")]
    AuthorTooLong,
    /// Published date lies in the future.
    #[error("published must not be a future date")]
    PublishedInFuture,
}

impl Book {
    /// Construct a record that has not been stored yet.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: Option<String>,
        published: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            author,
            published,
        }
    }

    /// Return a copy carrying the given identifier.
    #[must_use]
    pub fn with_id(mut self, id: BookId) -> Self {
        self.id = Some(id);
        self
    }

    /// Check the field constraints against the supplied current date.
    ///
    /// Lengths are counted in characters, not bytes, so the seed catalog's
    /// Japanese titles measure as their reader would expect.
    ///
    /// # Errors
    /// Returns the first violated [`BookValidationError`].
    pub fn validate(&self, today: NaiveDate) -> Result<(), BookValidationError> {
        if self.title.trim().is_empty() {
            return Err(BookValidationError::BlankTitle);
        }
        if self.title.chars().count() > TITLE_MAX_CHARS {
            return Err(BookValidationError::TitleTooLong);
        }
        if let Some(author) = &self.author {
            if author.chars().count() > AUTHOR_MAX_CHARS {
                return Err(BookValidationError::AuthorTooLong);
            }
        }
        if let Some(published) = self.published {
            if published > today {
                return Err(BookValidationError::PublishedInFuture);
            }
        }
        Ok(())
    }

    /// True when `other` is a distinct record (different id) sharing this
    /// title. A record is never a duplicate of itself.
    #[must_use]
    pub fn duplicates_title_of(&self, other: &Self) -> bool {
        if self.id.is_some() && self.id == other.id {
            return false;
        }
        self.title == other.title
    }
}

#[cfg(test)]
#[path = "book_tests.rs"]
mod tests;
