//! Service configuration types for Confidant.
//!
//! `ServiceConfig` represents the optional `confidant.toml` that selects the
//! completion model and endpoint. Credentials never live here; the API key
//! comes from the environment at startup.

use serde::{Deserialize, Serialize};

/// Completion settings for the service. All fields have sensible defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Model identifier sent with every completion request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the OpenAI-compatible API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Optional cap on generated tokens. Unset leaves it to the provider.
    #[serde(default)]
    pub max_tokens: Option<u32>,

    /// Optional sampling temperature. Unset leaves it to the provider.
    #[serde(default)]
    pub temperature: Option<f64>,
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            max_tokens: None,
            temperature: None,
        }
    }
}
