//! API error taxonomy and response mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the route handlers.
///
/// Validation errors never reach the downstream call; upstream errors
/// are logged once here and surfaced with the underlying message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required request field absent or empty. Carries the
    /// caller-facing field label ("Input", "Query").
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Request used a method other than the one the route accepts
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The downstream provider call failed
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": format!("{} is required", field) })),
            )
                .into_response(),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(json!({ "error": "Method not allowed" })),
            )
                .into_response(),
            ApiError::Upstream(e) => {
                tracing::error!("Error processing request: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Error processing request",
                        "details": e.to_string(),
                    })),
                )
                    .into_response()
            }
        }
    }
}
