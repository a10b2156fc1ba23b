#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every pipeline failure is a returned value, never a panic, and never a
/// partial result. Diagnostic detail (raw upstream text) is logged at the
/// failure site and not included in the response body.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or empty required caller input. Detected before any network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Transport, auth, or rate-limit failure from the generation service.
    /// The upstream message is passed through verbatim. No automatic retry.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// The generation service returned no content for a structured call.
    #[error("Empty response: {0}")]
    EmptyResponse(String),

    /// A structured-output call returned text that is not parseable JSON.
    #[error("Malformed JSON: {0}")]
    MalformedJson(String),

    /// Parsed JSON is missing required fields or under the minimum point count.
    #[error("Invalid structure: {0}")]
    InvalidStructure(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Upstream(msg) => {
                tracing::error!("Upstream error: {msg}");
                (StatusCode::BAD_GATEWAY, msg.clone())
            }
            AppError::EmptyResponse(msg) => {
                tracing::error!("Empty upstream response: {msg}");
                (StatusCode::BAD_GATEWAY, msg.clone())
            }
            AppError::MalformedJson(msg) => {
                tracing::error!("Malformed upstream JSON: {msg}");
                (StatusCode::BAD_GATEWAY, msg.clone())
            }
            AppError::InvalidStructure(msg) => {
                tracing::error!("Invalid upstream structure: {msg}");
                (StatusCode::BAD_GATEWAY, msg.clone())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
