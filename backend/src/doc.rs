//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct which generates the OpenAPI specification
//! for the catalog REST API. Swagger UI is enabled in debug builds only.

use utoipa::OpenApi;

/// OpenAPI document for the catalog REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Book catalog API",
        description = "CRUD and search over an in-memory book catalog."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::books::get_book,
        crate::inbound::http::books::list_books,
        crate::inbound::http::books::search_books,
        crate::inbound::http::books::search_books_by_author,
        crate::inbound::http::books::add_book,
        crate::inbound::http::books::update_book,
        crate::inbound::http::books::delete_book,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        crate::domain::Book,
        crate::inbound::http::ErrorMessageBody,
    )),
    tags(
        (name = "books", description = "Catalog CRUD and search"),
        (name = "health", description = "Probes")
    )
)]
pub struct ApiDoc;
