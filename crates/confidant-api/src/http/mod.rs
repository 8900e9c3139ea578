//! HTTP/REST API layer for Confidant.
//!
//! Axum-based API exposing `POST /chat/` and `GET /chats/`, with CORS and
//! request tracing.

pub mod error;
pub mod handlers;
pub mod router;
