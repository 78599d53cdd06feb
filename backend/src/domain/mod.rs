//! Domain primitives and the catalog facade.
//!
//! Purpose: define the transport-agnostic catalog model. Inbound adapters map
//! [`Error`] to HTTP responses; the outbound in-memory adapter implements the
//! [`ports::BookRepository`] port.

pub mod book;
pub mod catalog;
pub mod error;
pub mod ports;
pub mod query;

pub use self::book::{AUTHOR_MAX_CHARS, Book, BookId, BookValidationError, TITLE_MAX_CHARS};
pub use self::catalog::CatalogService;
pub use self::error::{Error, ErrorCode};
