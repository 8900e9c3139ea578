//! Completion client: one user message in, one generated reply out.
//!
//! Every request carries exactly two messages -- the fixed [`SYSTEM_PROMPT`]
//! followed by the user's text. The provider is injected at construction so
//! the application can pick a real backend and tests can pass a stub.

use std::time::Instant;

use tracing::{debug, info_span, warn, Instrument};

use confidant_types::config::ServiceConfig;
use confidant_types::llm::{CompletionRequest, LlmError, Message};

use super::prompt::SYSTEM_PROMPT;
use crate::llm::box_provider::BoxLlmProvider;

/// Sends user messages to the completion provider behind the fixed persona.
///
/// No retries: a provider failure is returned to the caller as-is.
pub struct CompletionClient {
    provider: BoxLlmProvider,
    model: String,
    max_tokens: Option<u32>,
    temperature: Option<f64>,
}

impl CompletionClient {
    /// Create a client for `provider` using the model settings in `config`.
    pub fn new(provider: BoxLlmProvider, config: &ServiceConfig) -> Self {
        Self {
            provider,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    /// Model identifier sent with each request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate a reply to `user_message`.
    ///
    /// Returns the content of the provider's first choice verbatim.
    pub async fn generate(&self, user_message: &str) -> Result<String, LlmError> {
        let request = self.build_request(user_message);
        let span = info_span!(
            "chat",
            gen_ai.operation.name = "chat",
            gen_ai.provider.name = %self.provider.name(),
            gen_ai.request.model = %self.model,
        );

        let start = Instant::now();
        let result = self.provider.complete(&request).instrument(span).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(response) => {
                debug!(
                    response_id = %response.id,
                    stop_reason = %response.stop_reason,
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    elapsed_ms,
                    "Completion received"
                );
                Ok(response.content)
            }
            Err(e) => {
                warn!(error = %e, elapsed_ms, "Completion request failed");
                Err(e)
            }
        }
    }

    fn build_request(&self, user_message: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            messages: vec![Message::system(SYSTEM_PROMPT), Message::user(user_message)],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}
