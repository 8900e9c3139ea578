//! Chat service: validate, generate, store.
//!
//! ChatService handles one inbound message end to end. Nothing happens before
//! validation passes, and a row is only written once the provider has
//! produced a reply, so readers never see a half-filled exchange.

use tracing::{debug, error, info};

use confidant_types::error::{ChatError, NO_MESSAGE_PROVIDED};
use confidant_types::exchange::ChatOutcome;

use super::completion::CompletionClient;
use crate::repository::exchange::ExchangeRepository;

/// Handles chat messages against a completion client and an exchange store.
///
/// Generic over `ExchangeRepository` to keep confidant-core free of any
/// storage dependency.
pub struct ChatService<R: ExchangeRepository> {
    repo: R,
    completion: CompletionClient,
}

impl<R: ExchangeRepository> ChatService<R> {
    /// Create a new chat service with the given store and completion client.
    pub fn new(repo: R, completion: CompletionClient) -> Self {
        Self { repo, completion }
    }

    /// Handle one user message.
    ///
    /// - Blank input (empty or whitespace only) fails with
    ///   [`ChatError::Validation`] before any provider call or write.
    /// - A provider failure is returned as [`ChatError::Provider`]; nothing is stored.
    /// - A storage failure after generation is returned as
    ///   [`ChatError::Storage`] carrying the generated reply.
    ///
    /// The message is stored exactly as received, untrimmed. Identical
    /// messages are not deduplicated.
    pub async fn handle(&self, user_message: &str) -> Result<ChatOutcome, ChatError> {
        if user_message.trim().is_empty() {
            debug!("Rejected chat request without a message");
            return Err(ChatError::Validation(NO_MESSAGE_PROVIDED.to_string()));
        }

        let generated = self.completion.generate(user_message).await?;

        let exchange = match self.repo.insert(user_message, &generated).await {
            Ok(exchange) => exchange,
            Err(source) => {
                error!(error = %source, "Generated reply could not be stored");
                return Err(ChatError::Storage { source, generated });
            }
        };

        info!(exchange_id = %exchange.id, "Chat exchange stored");

        Ok(ChatOutcome {
            response: exchange.ai_response,
            exchange_id: exchange.id,
        })
    }
}
