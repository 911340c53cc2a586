use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Error returned by request handlers
#[derive(Debug)]
pub enum ApiError {
    /// Invalid input or a point outside the network
    BadRequest(String),
    /// Engine or runtime fault
    Internal(String),
}

impl From<bikeroute_core::Error> for ApiError {
    fn from(e: bikeroute_core::Error) -> Self {
        if e.is_client_error() {
            ApiError::BadRequest(e.to_string())
        } else {
            ApiError::Internal(e.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => {
                tracing::debug!(%message, "Rejected route request");
                (StatusCode::BAD_REQUEST, message)
            }
            ApiError::Internal(message) => {
                tracing::error!(%message, "Route request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
