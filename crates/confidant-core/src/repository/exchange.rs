//! ExchangeRepository trait definition.
//!
//! Storage interface for chat exchanges. The store owns id and timestamp
//! assignment; callers only ever hand over the two text fields.

use confidant_types::error::RepositoryError;
use confidant_types::exchange::ChatExchange;

/// Repository trait for chat exchange persistence.
///
/// Implementations live in confidant-infra (e.g., `SqliteExchangeRepository`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait ExchangeRepository: Send + Sync {
    /// Store a new exchange and return it with its assigned id and timestamp.
    ///
    /// The write is committed before this returns. On error nothing is visible
    /// to readers.
    fn insert(
        &self,
        user_message: &str,
        ai_response: &str,
    ) -> impl std::future::Future<Output = Result<ChatExchange, RepositoryError>> + Send;

    /// All exchanges, ordered by timestamp DESC then id DESC.
    fn list_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ChatExchange>, RepositoryError>> + Send;

    /// Number of stored exchanges.
    fn count(&self) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
