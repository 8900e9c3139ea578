//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both CLI and REST API.
//! Services are generic over the repository trait; AppState pins them to the
//! SQLite implementation and injects the completion provider.

use std::sync::Arc;

use anyhow::Context;
use secrecy::SecretString;

use confidant_core::chat::completion::CompletionClient;
use confidant_core::chat::history::HistoryService;
use confidant_core::chat::service::ChatService;
use confidant_core::llm::box_provider::BoxLlmProvider;
use confidant_infra::llm::create_provider;
use confidant_infra::sqlite::exchange::SqliteExchangeRepository;
use confidant_infra::sqlite::pool::DatabasePool;
use confidant_types::config::ServiceConfig;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteChatService = ChatService<SqliteExchangeRepository>;

pub type ConcreteHistoryService = HistoryService<SqliteExchangeRepository>;

/// Environment variable holding the completion provider credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Shared application state holding all services.
///
/// Cheap to clone; every request handler gets its own copy.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub history_service: Arc<ConcreteHistoryService>,
}

impl AppState {
    /// Initialize the application state: connect to DB, resolve the API key,
    /// wire services.
    pub async fn init(database_url: &str, config: &ServiceConfig) -> anyhow::Result<Self> {
        let api_key = resolve_api_key()?;

        let db_pool = open_database(database_url).await?;
        let provider = create_provider(config, api_key);

        Ok(Self::from_parts(db_pool, provider, config))
    }

    /// Wire services from an open pool and an already-built provider.
    pub fn from_parts(
        db_pool: DatabasePool,
        provider: BoxLlmProvider,
        config: &ServiceConfig,
    ) -> Self {
        let completion = CompletionClient::new(provider, config);
        let chat_service = ChatService::new(SqliteExchangeRepository::new(db_pool.clone()), completion);
        let history_service = HistoryService::new(SqliteExchangeRepository::new(db_pool));

        Self {
            chat_service: Arc::new(chat_service),
            history_service: Arc::new(history_service),
        }
    }
}

/// Open the database, creating the schema if needed.
pub async fn open_database(database_url: &str) -> anyhow::Result<DatabasePool> {
    ensure_parent_dir(database_url).await?;
    DatabasePool::new(database_url)
        .await
        .context("failed to open database")
}

/// Read the provider credential from the environment.
///
/// Only called by commands that talk to the provider, so a missing key never
/// stops `history` or `status` from working.
fn resolve_api_key() -> anyhow::Result<SecretString> {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => Ok(SecretString::from(key)),
        _ => anyhow::bail!("{API_KEY_ENV} is not set; export it or add it to .env"),
    }
}

/// Create the directory holding a file-backed SQLite database.
async fn ensure_parent_dir(database_url: &str) -> anyhow::Result<()> {
    let Some(path) = database_url.strip_prefix("sqlite://") else {
        return Ok(());
    };
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() || path == ":memory:" {
        return Ok(());
    }
    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    Ok(())
}
