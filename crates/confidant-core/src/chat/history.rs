//! History service: stored exchanges, newest first.

use confidant_types::error::RepositoryError;
use confidant_types::exchange::ExchangeSummary;

use crate::repository::exchange::ExchangeRepository;

/// Read-only view over the exchange store.
pub struct HistoryService<R: ExchangeRepository> {
    repo: R,
}

impl<R: ExchangeRepository> HistoryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Every stored exchange, most recent first, without timestamps.
    ///
    /// An empty store yields an empty list.
    pub async fn list_all(&self) -> Result<Vec<ExchangeSummary>, RepositoryError> {
        let exchanges = self.repo.list_all().await?;
        Ok(exchanges.into_iter().map(ExchangeSummary::from).collect())
    }

    /// Number of stored exchanges.
    pub async fn count(&self) -> Result<u64, RepositoryError> {
        self.repo.count().await
    }
}

#[cfg(test)]
mod tests {
    use confidant_types::exchange::ExchangeId;

    use super::*;
    use crate::testing::InMemoryExchangeRepository;

    #[tokio::test]
    async fn test_list_all_empty_store() {
        let history = HistoryService::new(InMemoryExchangeRepository::new());
        assert!(history.list_all().await.unwrap().is_empty());
        assert_eq!(history.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_all_newest_first() {
        let repo = InMemoryExchangeRepository::new();
        repo.insert("first", "one").await.unwrap();
        repo.insert("second", "two").await.unwrap();
        repo.insert("third", "three").await.unwrap();

        let history = HistoryService::new(repo);
        let chats = history.list_all().await.unwrap();

        let ids: Vec<ExchangeId> = chats.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![ExchangeId(3), ExchangeId(2), ExchangeId(1)]);
        assert_eq!(chats[0].user_message, "third");
        assert_eq!(chats[0].ai_response, "three");
    }
}
