//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the catalog facade and stay testable with any repository behind it.

use std::sync::Arc;

use crate::domain::CatalogService;
use crate::domain::ports::BookRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Catalog use-case surface.
    pub catalog: CatalogService,
}

impl HttpState {
    /// Build handler state around a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self {
            catalog: CatalogService::new(repository),
        }
    }
}
