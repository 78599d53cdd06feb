//! Typed HTTP client for the book catalog service.
//!
//! The client owns transport details only: URL construction, JSON decoding,
//! and the reconstruction of typed failures from the wire contract. Callers
//! never see raw status codes; [`ClientError`] is the whole failure surface.

pub mod error;
pub mod model;

pub use error::{ClientError, ErrorMessage};
pub use model::{Book, NewBook};

use std::collections::HashMap;
use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the catalog's REST endpoints.
pub struct BookClient {
    http: Client,
    base_url: Url,
}

impl BookClient {
    /// Build a client against the given base URL with a default timeout.
    ///
    /// # Errors
    /// Returns [`ClientError::Transport`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(DEFAULT_REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::transport(e.to_string()))?;
        Ok(Self::with_http_client(http, base_url))
    }

    /// Build a client reusing an existing reqwest client.
    #[must_use]
    pub fn with_http_client(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::transport(format!("invalid endpoint {path}: {e}")))
    }

    /// Fetch one book; `None` when the catalog has no record under `id`.
    ///
    /// This is the one read that signals absence through the payload (JSON
    /// `null`) rather than a 404.
    ///
    /// # Errors
    /// [`ClientError::Transport`] or [`ClientError::Decode`].
    pub async fn get(&self, id: u32) -> Result<Option<Book>, ClientError> {
        let url = self.endpoint(&format!("books/{id}"))?;
        let response = self.send(self.http.get(url)).await?;
        self.read(response).await
    }

    /// Fetch every book, ordered by id.
    ///
    /// # Errors
    /// [`ClientError::Transport`] or [`ClientError::Decode`].
    pub async fn get_all(&self) -> Result<Vec<Book>, ClientError> {
        let url = self.endpoint("books")?;
        let response = self.send(self.http.get(url)).await?;
        self.read(response).await
    }

    /// Search by exact field values (`id`, `title`, `author`).
    ///
    /// # Errors
    /// [`ClientError::Transport`] or [`ClientError::Decode`].
    pub async fn find_by_condition(
        &self,
        condition: &HashMap<String, String>,
    ) -> Result<Vec<Book>, ClientError> {
        let mut url = self.endpoint("books/search")?;
        url.query_pairs_mut().extend_pairs(condition.iter());
        let response = self.send(self.http.get(url)).await?;
        self.read(response).await
    }

    /// Search for books whose author starts with `prefix`.
    ///
    /// # Errors
    /// [`ClientError::Validation`] for a blank or oversized prefix, plus the
    /// usual transport and decode failures.
    pub async fn find_by_author_prefix(&self, prefix: &str) -> Result<Vec<Book>, ClientError> {
        let mut url = self.endpoint("books/author")?;
        url.query_pairs_mut().append_pair("prefix", prefix);
        let response = self.send(self.http.get(url)).await?;
        self.read(response).await
    }

    /// Create a book; the returned record carries the assigned id.
    ///
    /// # Errors
    /// [`ClientError::Duplicate`] when the title is already held,
    /// [`ClientError::Validation`] for field violations.
    pub async fn add(&self, book: NewBook) -> Result<Book, ClientError> {
        let url = self.endpoint("books")?;
        let response = self.send(self.http.post(url).json(&book)).await?;
        self.read(response).await
    }

    /// Replace the record addressed by `book.id`.
    ///
    /// # Errors
    /// [`ClientError::NotFound`] for an unknown id, [`ClientError::Duplicate`]
    /// when another record holds the title, [`ClientError::Validation`] for
    /// field violations.
    pub async fn update(&self, book: &Book) -> Result<Book, ClientError> {
        let url = self.endpoint("books")?;
        let response = self.send(self.http.put(url).json(book)).await?;
        self.read(response).await
    }

    /// Delete the record under `id`.
    ///
    /// # Errors
    /// [`ClientError::NotFound`] for an unknown id.
    pub async fn delete(&self, id: u32) -> Result<(), ClientError> {
        let url = self.endpoint(&format!("books/{id}"))?;
        let response = self.send(self.http.delete(url)).await?;
        self.expect_no_content(response).await
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, ClientError> {
        request
            .send()
            .await
            .map_err(|e| ClientError::transport(e.to_string()))
    }

    async fn read<T: DeserializeOwned>(&self, response: Response) -> Result<T, ClientError> {
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::transport(e.to_string()))?;
        if let Some(failure) = error::intercept(status, body.as_ref()) {
            return Err(failure);
        }
        if !status.is_success() {
            return Err(ClientError::transport(format!(
                "unexpected status {}",
                status.as_u16()
            )));
        }
        serde_json::from_slice(body.as_ref()).map_err(|e| ClientError::decode(e.to_string()))
    }

    async fn expect_no_content(&self, response: Response) -> Result<(), ClientError> {
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::transport(e.to_string()))?;
        if let Some(failure) = error::intercept(status, body.as_ref()) {
            return Err(failure);
        }
        if !status.is_success() {
            return Err(ClientError::transport(format!(
                "unexpected status {}",
                status.as_u16()
            )));
        }
        Ok(())
    }
}
