//! Application error type mapping to HTTP status codes.
//!
//! Validation failures never reach this type: `POST /chat/` answers them with
//! a normal 200 payload. Everything here is a server-side fault.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use confidant_types::error::RepositoryError;
use confidant_types::llm::LlmError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// The completion provider failed or returned nothing usable.
    Provider(LlmError),
    /// The database failed. `generated` holds a reply produced before the
    /// failure, if any, so the client still receives it.
    Storage {
        source: RepositoryError,
        generated: Option<String>,
    },
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        AppError::Storage {
            source: e,
            generated: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Provider(e) => {
                tracing::warn!(error = %e, "Completion provider error");
                (
                    StatusCode::BAD_GATEWAY,
                    Json(json!({ "error": format!("Completion provider error: {e}") })),
                )
                    .into_response()
            }
            AppError::Storage { source, generated } => {
                tracing::error!(error = %source, "Storage error");
                let mut body = json!({ "error": format!("Storage error: {source}") });
                if let Some(text) = generated {
                    body["response"] = json!(text);
                }
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
