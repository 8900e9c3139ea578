//! Chat endpoint handlers.
//!
//! - `POST /chat/` -- answer one message and store the exchange
//! - `GET /chats/` -- every stored exchange, newest first

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use confidant_types::error::ChatError;
use confidant_types::exchange::ExchangeSummary;

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for `POST /chat/`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Missing and `null` are treated like an empty message.
    #[serde(default)]
    pub message: Option<String>,
}

/// Response body for `POST /chat/`.
///
/// Validation failures are reported in-band with a 200 status.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ChatReply {
    Response { response: String },
    Error { error: String },
}

/// Response body for `GET /chats/`.
#[derive(Debug, Serialize)]
pub struct ChatHistory {
    pub chats: Vec<ExchangeSummary>,
}

/// POST /chat/ - Generate a reply and store the exchange.
pub async fn post_chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    let message = body.message.unwrap_or_default();

    match state.chat_service.handle(&message).await {
        Ok(outcome) => Ok(Json(ChatReply::Response {
            response: outcome.response,
        })),
        Err(ChatError::Validation(error)) => Ok(Json(ChatReply::Error { error })),
        Err(ChatError::Provider(e)) => Err(AppError::Provider(e)),
        Err(ChatError::Storage { source, generated }) => Err(AppError::Storage {
            source,
            generated: Some(generated),
        }),
    }
}

/// GET /chats/ - List stored exchanges, newest first, without timestamps.
pub async fn list_chats(State(state): State<AppState>) -> Result<Json<ChatHistory>, AppError> {
    let chats = state.history_service.list_all().await?;
    Ok(Json(ChatHistory { chats }))
}
