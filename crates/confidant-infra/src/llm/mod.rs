//! LLM provider implementations.
//!
//! Contains the concrete implementation of the [`LlmProvider`] trait defined
//! in `confidant-core`, and a factory ([`create_provider`]) that builds the
//! boxed provider the application injects into its completion client.
//!
//! [`LlmProvider`]: confidant_core::llm::provider::LlmProvider

pub mod openai_compat;

use secrecy::SecretString;

use confidant_core::llm::box_provider::BoxLlmProvider;
use confidant_types::config::ServiceConfig;

use self::openai_compat::config::OpenAiCompatConfig;
use self::openai_compat::OpenAiCompatibleProvider;

/// Build the completion provider described by `config`.
///
/// The API key was resolved by the caller at startup; it is moved into the
/// provider and never logged.
pub fn create_provider(config: &ServiceConfig, api_key: SecretString) -> BoxLlmProvider {
    let provider = OpenAiCompatibleProvider::new(OpenAiCompatConfig {
        provider_name: "openai".to_string(),
        base_url: config.base_url.clone(),
        api_key,
    });
    tracing::debug!(
        provider = "openai",
        model = %config.model,
        base_url = %config.base_url,
        "Completion provider configured"
    );
    BoxLlmProvider::new(provider)
}
