//! Adapter error type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::action::headers::ACTIONS_CORS_HEADERS;

/// The one error surfaced by the order endpoint.
///
/// The contract promises only "non-2xx on any failure" with a human-readable
/// body, so every fallible step — bad account, bad amounts, unknown token,
/// upstream failure — collapses into a single tagged value carrying a display
/// message. No sub-variants, no machine-readable codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct AdapterError(pub String);

impl AdapterError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl From<reqwest::Error> for AdapterError {
    fn from(err: reqwest::Error) -> Self {
        Self(format!("request to order service failed: {err}"))
    }
}

impl From<serde_json::Error> for AdapterError {
    fn from(err: serde_json::Error) -> Self {
        Self(format!("malformed order service response: {err}"))
    }
}

impl IntoResponse for AdapterError {
    /// Uniform boundary mapping: 400 + Actions CORS headers + the display
    /// message as a plain body. No retries, no differentiation.
    fn into_response(self) -> Response {
        tracing::warn!(error = %self.0, "order request failed");
        (StatusCode::BAD_REQUEST, ACTIONS_CORS_HEADERS, self.0).into_response()
    }
}
