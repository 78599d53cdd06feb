//! Read-side predicates for catalog searches.
//!
//! Pure functions so storage adapters share one definition of what matching
//! means. Field matching stringifies the record side and compares exactly;
//! prefix matching is case-sensitive.

use std::collections::HashMap;

use super::Book;

/// True when the record satisfies every supplied condition.
///
/// Recognised fields are `id`, `title`, and `author`; anything else is
/// ignored rather than filtering. An empty condition map matches everything.
/// A record without an author never matches an `author` condition.
#[must_use]
pub fn matches_condition(book: &Book, condition: &HashMap<String, String>) -> bool {
    condition
        .iter()
        .all(|(field, value)| match field.as_str() {
            "id" => book.id.is_some_and(|id| id.to_string() == *value),
            "title" => book.title == *value,
            "author" => book.author.as_deref() == Some(value.as_str()),
            _ => true,
        })
}

/// True when the record's author starts with `prefix`.
///
/// Records without an author never match, whatever the prefix.
#[must_use]
pub fn matches_author_prefix(book: &Book, prefix: &str) -> bool {
    book.author
        .as_deref()
        .is_some_and(|author| author.starts_with(prefix))
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
