//! Handler tests driving the full Actix service with an in-memory catalog.

use super::*;
use crate::inbound::http::error::ErrorMessageBody;
use crate::outbound::InMemoryBookRepository;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test};
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;

fn seed_book(id: u32, title: &str, author: &str) -> Book {
    Book::new(title, Some(author.to_owned()), None).with_id(id)
}

fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let repository = InMemoryBookRepository::with_books([
        seed_book(1, "Book A", "Auth1"),
        seed_book(2, "Book B", "Auth1"),
        seed_book(3, "Book C", "Auth2"),
    ]);
    let state = HttpState::new(Arc::new(repository));
    App::new()
        .app_data(web::Data::new(state))
        .service(list_books)
        .service(search_books)
        .service(search_books_by_author)
        .service(get_book)
        .service(add_book)
        .service(update_book)
        .service(delete_book)
}

async fn read_error(response: actix_web::dev::ServiceResponse) -> ErrorMessageBody {
    let body = actix_test::read_body(response).await;
    serde_json::from_slice(&body).expect("error envelope")
}

#[actix_rt::test]
async fn get_returns_the_record() {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::get().uri("/books/1").to_request();

    let book: Book = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(book, seed_book(1, "Book A", "Auth1"));
}

#[actix_rt::test]
async fn get_signals_absence_with_a_null_body_not_a_404() {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::get().uri("/books/999").to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = actix_test::read_body(response).await;
    assert_eq!(body.as_ref(), b"null");
}

#[actix_rt::test]
async fn list_is_ordered_by_id() {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::get().uri("/books").to_request();

    let books: Vec<Book> = actix_test::call_and_read_body_json(&app, request).await;
    let ids: Vec<_> = books.iter().filter_map(|book| book.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[rstest]
#[case::by_author("/books/search?author=Auth1", vec![1, 2])]
#[case::by_title("/books/search?title=Book%20C", vec![3])]
#[case::by_id("/books/search?id=2", vec![2])]
#[case::unknown_field_ignored("/books/search?publisher=anything", vec![1, 2, 3])]
#[case::no_conditions("/books/search", vec![1, 2, 3])]
#[case::no_match("/books/search?title=missing", vec![])]
#[actix_rt::test]
async fn search_filters_by_exact_field_values(#[case] uri: &str, #[case] expected: Vec<u32>) {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::get().uri(uri).to_request();

    let books: Vec<Book> = actix_test::call_and_read_body_json(&app, request).await;
    let ids: Vec<_> = books.iter().filter_map(|book| book.id).collect();
    assert_eq!(ids, expected);
}

#[actix_rt::test]
async fn author_search_returns_prefix_matches_in_id_order() {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::get()
        .uri("/books/author?prefix=Auth1")
        .to_request();

    let books: Vec<Book> = actix_test::call_and_read_body_json(&app, request).await;
    let ids: Vec<_> = books.iter().filter_map(|book| book.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[rstest]
#[case::blank("/books/author?prefix=%20%20", "prefix must not be blank")]
#[case::oversized(
    "/books/author?prefix=elevenchars",
    "prefix must be at most 10 characters"
)]
#[actix_rt::test]
async fn author_search_rejects_bad_prefixes(#[case] uri: &str, #[case] expected: &str) {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::get().uri(uri).to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_error(response).await.message, expected);
}

#[actix_rt::test]
async fn add_assigns_the_next_id() {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::post()
        .uri("/books")
        .set_json(json!({ "id": null, "title": "Book D", "author": "Auth3", "published": null }))
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = actix_test::read_body(response).await;
    let stored: Book = serde_json::from_slice(&body).expect("book body");
    assert_eq!(stored.id, Some(4));
}

#[actix_rt::test]
async fn add_rejects_a_duplicate_title_with_409() {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::post()
        .uri("/books")
        .set_json(json!({ "id": null, "title": "Book A", "author": "X", "published": null }))
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(read_error(response).await.message, "title:Book A");
}

#[rstest]
#[case::supplied_id(
    json!({ "id": 7, "title": "Book D", "author": null, "published": null }),
    "id must not be supplied on add"
)]
#[case::blank_title(
    json!({ "id": null, "title": "  ", "author": null, "published": null }),
    "title must not be blank"
)]
#[case::future_date(
    json!({ "id": null, "title": "Book D", "author": null, "published": "2999-01-01" }),
    "published must not be a future date"
)]
#[actix_rt::test]
async fn add_rejects_invalid_payloads_with_400(#[case] payload: Value, #[case] expected: &str) {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::post()
        .uri("/books")
        .set_json(payload)
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_error(response).await.message, expected);
}

#[actix_rt::test]
async fn update_with_the_same_title_succeeds() {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::put()
        .uri("/books")
        .set_json(json!({ "id": 2, "title": "Book B", "author": "Auth1", "published": null }))
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = actix_test::read_body(response).await;
    let stored: Book = serde_json::from_slice(&body).expect("book body");
    assert_eq!(stored, seed_book(2, "Book B", "Auth1"));
}

#[actix_rt::test]
async fn update_of_an_unknown_id_is_404() {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::put()
        .uri("/books")
        .set_json(json!({ "id": 999, "title": "New", "author": null, "published": null }))
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_error(response).await.message, "id:999");
}

#[actix_rt::test]
async fn update_without_an_id_is_400() {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::put()
        .uri("/books")
        .set_json(json!({ "id": null, "title": "New", "author": null, "published": null }))
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_error(response).await.message,
        "id must be supplied on update"
    );
}

#[actix_rt::test]
async fn delete_answers_204_then_the_record_is_gone() {
    let app = actix_test::init_service(test_app()).await;

    let delete = actix_test::TestRequest::delete().uri("/books/2").to_request();
    let response = actix_test::call_service(&app, delete).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let get = actix_test::TestRequest::get().uri("/books/2").to_request();
    let response = actix_test::call_service(&app, get).await;
    let body = actix_test::read_body(response).await;
    assert_eq!(body.as_ref(), b"null");

    let again = actix_test::TestRequest::delete().uri("/books/2").to_request();
    let response = actix_test::call_service(&app, again).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_error(response).await.message, "id:2");
}
