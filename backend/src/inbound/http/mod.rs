//! HTTP inbound adapter exposing the catalog REST endpoints.

pub mod books;
pub mod error;
pub mod health;
pub mod state;

pub use error::{ApiResult, ErrorMessageBody};
