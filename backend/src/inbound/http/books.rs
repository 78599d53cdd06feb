//! Book catalog HTTP handlers.
//!
//! ```text
//! GET    /books/{id}
//! GET    /books
//! GET    /books/search?field=value...
//! GET    /books/author?prefix=p
//! POST   /books
//! PUT    /books
//! DELETE /books/{id}
//! ```
//!
//! Field validation happens here, before the facade is invoked; store
//! failures pass through untouched and are translated by the
//! [`ResponseError`](actix_web::ResponseError) impl in [`super::error`].

use std::collections::HashMap;

use actix_web::{HttpResponse, delete, get, post, put, web};
use chrono::Local;
use serde::Deserialize;

use crate::domain::{Book, BookId, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorMessageBody;
use crate::inbound::http::state::HttpState;

/// Longest accepted author prefix, in characters.
const PREFIX_MAX_CHARS: usize = 10;

/// Query parameters for the author prefix search.
#[derive(Debug, Deserialize)]
pub struct AuthorPrefixQuery {
    /// Case-sensitive prefix the author must start with.
    pub prefix: String,
}

fn validate_book(book: &Book) -> Result<(), Error> {
    book.validate(Local::now().date_naive())?;
    Ok(())
}

fn validate_prefix(prefix: &str) -> Result<(), Error> {
    if prefix.trim().is_empty() {
        return Err(Error::invalid_request("prefix must not be blank"));
    }
    if prefix.chars().count() > PREFIX_MAX_CHARS {
        return Err(Error::invalid_request(format!(
            "prefix must be at most {PREFIX_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

/// Fetch one book by id.
///
/// Absence is not an error at this endpoint: the body is JSON `null` and the
/// status stays 200. This is the one read that signals missing records
/// through the payload instead of a 404.
#[utoipa::path(
    get,
    path = "/books/{id}",
    params(("id" = u32, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "The book, or JSON null when absent", body = Book)
    ),
    tags = ["books"],
    operation_id = "getBook"
)]
#[get("/books/{id}")]
pub async fn get_book(
    state: web::Data<HttpState>,
    id: web::Path<BookId>,
) -> ApiResult<web::Json<Option<Book>>> {
    Ok(web::Json(state.catalog.get(id.into_inner())))
}

/// List every book, ordered by id.
#[utoipa::path(
    get,
    path = "/books",
    responses((status = 200, description = "All books", body = [Book])),
    tags = ["books"],
    operation_id = "listBooks"
)]
#[get("/books")]
pub async fn list_books(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Book>>> {
    Ok(web::Json(state.catalog.list()))
}

/// Search by exact field values.
///
/// Supported fields are `id`, `title`, and `author`; unknown query parameters
/// are ignored, and no parameters at all returns the whole catalog.
#[utoipa::path(
    get,
    path = "/books/search",
    responses((status = 200, description = "Matching books", body = [Book])),
    tags = ["books"],
    operation_id = "searchBooks"
)]
#[get("/books/search")]
pub async fn search_books(
    state: web::Data<HttpState>,
    condition: web::Query<HashMap<String, String>>,
) -> ApiResult<web::Json<Vec<Book>>> {
    Ok(web::Json(state.catalog.search(&condition)))
}

/// Search by author prefix.
#[utoipa::path(
    get,
    path = "/books/author",
    params(("prefix" = String, Query, description = "Author prefix, 1 to 10 characters")),
    responses(
        (status = 200, description = "Books whose author starts with the prefix", body = [Book]),
        (status = 400, description = "Blank or oversized prefix", body = ErrorMessageBody)
    ),
    tags = ["books"],
    operation_id = "searchBooksByAuthor"
)]
#[get("/books/author")]
pub async fn search_books_by_author(
    state: web::Data<HttpState>,
    query: web::Query<AuthorPrefixQuery>,
) -> ApiResult<web::Json<Vec<Book>>> {
    validate_prefix(&query.prefix)?;
    Ok(web::Json(state.catalog.search_by_author_prefix(&query.prefix)))
}

/// Add a new book; the store assigns the identifier.
#[utoipa::path(
    post,
    path = "/books",
    request_body = Book,
    responses(
        (status = 200, description = "Stored book with its assigned id", body = Book),
        (status = 400, description = "Field validation failed", body = ErrorMessageBody),
        (status = 409, description = "Another book already holds the title", body = ErrorMessageBody)
    ),
    tags = ["books"],
    operation_id = "addBook"
)]
#[post("/books")]
pub async fn add_book(
    state: web::Data<HttpState>,
    book: web::Json<Book>,
) -> ApiResult<web::Json<Book>> {
    let book = book.into_inner();
    if book.id.is_some() {
        return Err(Error::invalid_request("id must not be supplied on add"));
    }
    validate_book(&book)?;
    Ok(web::Json(state.catalog.add(book)?))
}

/// Replace an existing book; the body must carry the id.
#[utoipa::path(
    put,
    path = "/books",
    request_body = Book,
    responses(
        (status = 200, description = "Stored book after replacement", body = Book),
        (status = 400, description = "Field validation failed", body = ErrorMessageBody),
        (status = 404, description = "No book under the supplied id", body = ErrorMessageBody),
        (status = 409, description = "Another book already holds the title", body = ErrorMessageBody)
    ),
    tags = ["books"],
    operation_id = "updateBook"
)]
#[put("/books")]
pub async fn update_book(
    state: web::Data<HttpState>,
    book: web::Json<Book>,
) -> ApiResult<web::Json<Book>> {
    let book = book.into_inner();
    if book.id.is_none() {
        return Err(Error::invalid_request("id must be supplied on update"));
    }
    validate_book(&book)?;
    Ok(web::Json(state.catalog.update(book)?))
}

/// Delete a book by id.
#[utoipa::path(
    delete,
    path = "/books/{id}",
    params(("id" = u32, Path, description = "Book identifier")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "No book under the supplied id", body = ErrorMessageBody)
    ),
    tags = ["books"],
    operation_id = "deleteBook"
)]
#[delete("/books/{id}")]
pub async fn delete_book(
    state: web::Data<HttpState>,
    id: web::Path<BookId>,
) -> ApiResult<HttpResponse> {
    state.catalog.delete(id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "books_tests.rs"]
mod tests;
