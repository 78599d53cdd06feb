//! End-to-end contract coverage: the real server behind a TCP listener, the
//! real typed client in front of it. This is where the two error translators
//! meet: a failure raised in the store must come back out of the client as
//! the matching typed failure carrying the same detail.

use std::collections::HashMap;
use std::sync::Arc;

use actix_web::{App, web};
use url::Url;

use backend::inbound::http::books::{
    add_book, delete_book, get_book, list_books, search_books, search_books_by_author, update_book,
};
use backend::inbound::http::state::HttpState;
use backend::outbound::InMemoryBookRepository;
use book_client::{Book, BookClient, ClientError, NewBook};

fn start_server() -> actix_test::TestServer {
    actix_test::start(|| {
        let repository = InMemoryBookRepository::seeded();
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
    })
}

fn client_for(server: &actix_test::TestServer) -> BookClient {
    let url = Url::parse(&format!("http://{}/", server.addr())).expect("server url");
    BookClient::new(url).expect("client construction")
}

#[actix_rt::test]
async fn crud_round_trip_through_the_wire() {
    let server = start_server();
    let client = client_for(&server);

    let all = client.get_all().await.expect("list");
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].title, "燃えよ剣");

    let stored = client
        .add(NewBook::new("新しい本", Some("著者".to_owned()), None))
        .await
        .expect("add");
    assert_eq!(stored.id, Some(4));

    let fetched = client.get(4).await.expect("get");
    assert_eq!(fetched, Some(stored.clone()));

    let updated = client
        .update(&Book {
            author: Some("別の著者".to_owned()),
            ..stored
        })
        .await
        .expect("update");
    assert_eq!(updated.author.as_deref(), Some("別の著者"));

    client.delete(4).await.expect("delete");
    assert_eq!(client.get(4).await.expect("get after delete"), None);
}

#[actix_rt::test]
async fn duplicate_title_comes_back_as_a_typed_duplicate() {
    let server = start_server();
    let client = client_for(&server);

    let failure = client
        .add(NewBook::new("峠", Some("誰か".to_owned()), None))
        .await
        .expect_err("seed already holds the title");

    let ClientError::Duplicate { message } = failure else {
        panic!("expected a duplicate failure, got {failure:?}");
    };
    assert!(
        message.contains("峠"),
        "detail must carry the colliding title, got {message:?}"
    );
    assert_eq!(message, "title:峠");
}

#[actix_rt::test]
async fn unknown_id_comes_back_as_a_typed_not_found() {
    let server = start_server();
    let client = client_for(&server);

    let failure = client.delete(999).await.expect_err("id 999 is not stored");
    assert_eq!(
        failure,
        ClientError::NotFound {
            message: "id:999".to_owned()
        }
    );

    let failure = client
        .update(&Book {
            id: Some(999),
            title: "幻".to_owned(),
            author: None,
            published: None,
        })
        .await
        .expect_err("update of an unknown id");
    assert!(matches!(failure, ClientError::NotFound { .. }));
}

#[actix_rt::test]
async fn validation_failures_come_back_as_typed_validation() {
    let server = start_server();
    let client = client_for(&server);

    let failure = client
        .add(NewBook::new("   ", None, None))
        .await
        .expect_err("blank title");
    assert_eq!(
        failure,
        ClientError::Validation {
            message: "title must not be blank".to_owned()
        }
    );

    let failure = client
        .find_by_author_prefix("")
        .await
        .expect_err("blank prefix");
    assert!(matches!(failure, ClientError::Validation { .. }));
}

#[actix_rt::test]
async fn searches_travel_the_wire_unfiltered() {
    let server = start_server();
    let client = client_for(&server);

    let by_author = client
        .find_by_author_prefix("司馬")
        .await
        .expect("author search");
    let ids: Vec<_> = by_author.iter().filter_map(|book| book.id).collect();
    assert_eq!(ids, vec![1, 2]);

    let condition = HashMap::from([("title".to_owned(), "峠".to_owned())]);
    let by_title = client
        .find_by_condition(&condition)
        .await
        .expect("condition search");
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].id, Some(2));
}
