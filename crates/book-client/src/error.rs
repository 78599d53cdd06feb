//! Client-side failure taxonomy and response interception.
//!
//! The contract layer intercepts exactly 400, 404, and 409 and rebuilds the
//! typed failure from the `{"message": …}` envelope. Any other status is
//! outside the contract: 2xx passes through, the rest degrade into a generic
//! transport failure. No retries happen here.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Wire envelope carried by every contract error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// Human-readable failure detail, e.g. `id:999` or `title:峠`.
    pub message: String,
}

/// Failures surfaced by [`BookClient`](crate::BookClient) calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Server answered 404: the addressed record does not exist.
    #[error("not found: {message}")]
    NotFound {
        /// Detail from the error envelope.
        message: String,
    },
    /// Server answered 409: the title is already held by another record.
    #[error("duplicate: {message}")]
    Duplicate {
        /// Detail from the error envelope.
        message: String,
    },
    /// Server answered 400: the request failed field validation.
    #[error("validation failed: {message}")]
    Validation {
        /// Detail from the error envelope.
        message: String,
    },
    /// Transport-level failure or a status outside the contract.
    #[error("transport failure: {message}")]
    Transport {
        /// What went wrong on the wire.
        message: String,
    },
    /// A success response whose body could not be decoded.
    #[error("response decoding failed: {message}")]
    Decode {
        /// Underlying decode problem.
        message: String,
    },
}

impl ClientError {
    /// Helper for wire-level failures.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Helper for payload decode failures.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

const HANDLED_STATUS: [StatusCode; 3] = [
    StatusCode::BAD_REQUEST,
    StatusCode::NOT_FOUND,
    StatusCode::CONFLICT,
];

/// Rebuild a typed failure from a contract status and its body.
///
/// Returns `None` for statuses outside {400, 404, 409}. A malformed body is
/// never swallowed: the failure kind still matches the status and the message
/// describes the parse problem instead.
#[must_use]
pub(crate) fn intercept(status: StatusCode, body: &[u8]) -> Option<ClientError> {
    if !HANDLED_STATUS.contains(&status) {
        return None;
    }

    let message = match serde_json::from_slice::<ErrorMessage>(body) {
        Ok(envelope) => envelope.message,
        Err(error) => {
            warn!(status = status.as_u16(), %error, "unparseable error body");
            format!("unparseable error body: {error}")
        }
    };

    Some(match status {
        StatusCode::CONFLICT => ClientError::Duplicate { message },
        StatusCode::NOT_FOUND => ClientError::NotFound { message },
        _ => ClientError::Validation { message },
    })
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
