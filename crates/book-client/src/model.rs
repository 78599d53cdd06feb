//! Client-side catalog models.
//!
//! Mirrors the server's wire shape without depending on the server crate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A catalog record as seen by clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Store-assigned identifier.
    pub id: Option<u32>,
    /// Required title, 1 to 20 characters.
    pub title: String,
    /// Optional author, at most 20 characters.
    pub author: Option<String>,
    /// Optional publication date.
    pub published: Option<NaiveDate>,
}

/// Payload for creating a record; the server assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewBook {
    /// Always absent; present so the wire shape matches [`Book`].
    pub id: Option<u32>,
    /// Required title.
    pub title: String,
    /// Optional author.
    pub author: Option<String>,
    /// Optional publication date.
    pub published: Option<NaiveDate>,
}

impl NewBook {
    /// Build a creation payload.
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
}
