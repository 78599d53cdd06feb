//! Server construction and endpoint wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use backend::inbound::http::books::{
    add_book, delete_book, get_book, list_books, search_books, search_books_by_author, update_book,
};
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::state::HttpState;
use backend::outbound::InMemoryBookRepository;
#[cfg(debug_assertions)]
use backend::ApiDoc;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    // /books/search and /books/author must register before /books/{id} so the
    // literal segments are not swallowed by the id pattern.
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .service(list_books)
        .service(search_books)
        .service(search_books_by_author)
        .service(get_book)
        .service(add_book)
        .service(update_book)
        .service(delete_book)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let repository = if config.seed_catalog {
        InMemoryBookRepository::seeded()
    } else {
        InMemoryBookRepository::new()
    };
    let http_state = web::Data::new(HttpState::new(Arc::new(repository)));

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
