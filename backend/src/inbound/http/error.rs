//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting Actix
//! handlers turn failures into the contract's status codes and JSON envelope.
//! This is the only place a status code is assigned.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Wire envelope for every non-2xx response in the contract.
///
/// The message is the entire failure payload; the category travels as the
/// status code.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorMessageBody {
    /// Human-readable failure detail, e.g. `id:999` or `title:峠`.
    #[schema(example = "id:999")]
    pub message: String,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let message = if matches!(self.code(), ErrorCode::InternalError) {
            // Internal failures are outside the wire contract; never leak detail.
            "Internal server error".to_owned()
        } else {
            self.message().to_owned()
        };
        HttpResponse::build(self.status_code()).json(ErrorMessageBody { message })
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Self::internal("Internal server error")
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
