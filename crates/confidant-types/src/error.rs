use thiserror::Error;

use crate::llm::LlmError;

/// Errors from repository operations (used by trait definitions in confidant-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),
}

/// Errors from handling a single chat message.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The message was missing or blank. Nothing was sent or stored.
    #[error("{0}")]
    Validation(String),

    /// The completion provider failed. Nothing was stored.
    #[error("completion failed: {0}")]
    Provider(#[from] LlmError),

    /// The reply was generated but could not be stored.
    ///
    /// `generated` keeps the reply so the caller can still hand it out.
    #[error("failed to store exchange: {source}")]
    Storage {
        #[source]
        source: RepositoryError,
        generated: String,
    },
}

/// Message returned when a chat request carries no usable text.
pub const NO_MESSAGE_PROVIDED: &str = "No message provided";
