//! Transport-level errors
//!
//! Only request decoding fails at this layer; GraphQL execution errors are
//! reported inside a normal 200 response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API error type with HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request could not be decoded into a GraphQL request (400, plain text)
    BadRequest { message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest { message } => {
                tracing::debug!(%message, "Rejected GraphQL request");
                (StatusCode::BAD_REQUEST, message).into_response()
            }
        }
    }
}
