//! Transport-facing failure taxonomy.
//!
//! These errors are transport agnostic. The HTTP inbound adapter is the single
//! place that assigns a status code to an [`ErrorCode`]; nothing below the
//! adapter inspects status codes.

use crate::domain::BookValidationError;
use crate::domain::ports::CatalogError;

/// Stable failure category; the set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The request is malformed or fails field validation.
    InvalidRequest,
    /// The addressed record does not exist.
    NotFound,
    /// The mutation would violate the title uniqueness invariant.
    Conflict,
    /// An unexpected failure inside the service.
    InternalError,
}

/// Failure payload carried from the domain to the wire translator.
///
/// Only the human-readable message crosses the wire; the category travels as
/// the HTTP status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    /// Create an error with an explicit category.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Failure category.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable detail returned to the wire translator.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(value: CatalogError) -> Self {
        let code = match value {
            CatalogError::NotFound { .. } => ErrorCode::NotFound,
            CatalogError::Duplicate { .. } => ErrorCode::Conflict,
        };
        // CatalogError renders its own wire detail (`id:<id>` / `title:<title>`).
        Self::new(code, value.to_string())
    }
}

impl From<BookValidationError> for Error {
    fn from(value: BookValidationError) -> Self {
        Self::invalid_request(value.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
