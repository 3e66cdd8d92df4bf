//! Uniform JSON response envelope.
//!
//! # Responsibility
//! - Wrap every endpoint result in `{error, message, data}`.
//! - Keep status-code/envelope pairing in one place.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Wire shape returned by every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub error: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// 200 response with an optional payload.
pub fn success<T: Serialize>(message: &str, data: Option<T>) -> Response {
    respond(StatusCode::OK, false, message, data)
}

/// Failure response carrying only a client-safe message.
pub fn failure(status: StatusCode, message: &str) -> Response {
    respond::<()>(status, true, message, None)
}

fn respond<T: Serialize>(
    status: StatusCode,
    error: bool,
    message: &str,
    data: Option<T>,
) -> Response {
    let envelope = ApiResponse {
        error,
        message: message.to_string(),
        data,
    };
    (status, Json(envelope)).into_response()
}
