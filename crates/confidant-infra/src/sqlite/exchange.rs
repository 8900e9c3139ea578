//! SQLite exchange repository implementation.
//!
//! Implements `ExchangeRepository` from `confidant-core` using sqlx with split
//! read/write pools: raw queries, a private row struct for mapping, inserts in
//! their own write transaction.

use chrono::{DateTime, Utc};
use sqlx::Row;

use confidant_core::repository::exchange::ExchangeRepository;
use confidant_types::error::RepositoryError;
use confidant_types::exchange::{ChatExchange, ExchangeId};

use super::pool::DatabasePool;

/// SQLite-backed implementation of `ExchangeRepository`.
#[derive(Clone)]
pub struct SqliteExchangeRepository {
    pool: DatabasePool,
}

impl SqliteExchangeRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain ChatExchange.
struct ChatRow {
    id: i64,
    user_message: String,
    ai_response: String,
    timestamp: String,
}

impl ChatRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_message: row.try_get("user_message")?,
            ai_response: row.try_get("ai_response")?,
            timestamp: row.try_get("timestamp")?,
        })
    }

    fn into_exchange(self) -> Result<ChatExchange, RepositoryError> {
        Ok(ChatExchange {
            id: ExchangeId(self.id),
            user_message: self.user_message,
            ai_response: self.ai_response,
            timestamp: parse_datetime(&self.timestamp)?,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn query_error(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => RepositoryError::Connection,
        other => RepositoryError::Query(other.to_string()),
    }
}

impl ExchangeRepository for SqliteExchangeRepository {
    async fn insert(
        &self,
        user_message: &str,
        ai_response: &str,
    ) -> Result<ChatExchange, RepositoryError> {
        let mut tx = self.pool.write_session().await.map_err(query_error)?;

        let row = sqlx::query(
            r#"INSERT INTO chats (user_message, ai_response)
               VALUES (?, ?)
               RETURNING id, user_message, ai_response, timestamp"#,
        )
        .bind(user_message)
        .bind(ai_response)
        .fetch_one(&mut *tx)
        .await
        .map_err(query_error)?;

        let exchange = ChatRow::from_row(&row)
            .map_err(query_error)?
            .into_exchange()?;

        tx.commit().await.map_err(query_error)?;

        Ok(exchange)
    }

    async fn list_all(&self) -> Result<Vec<ChatExchange>, RepositoryError> {
        let mut conn = self.pool.read_session().await.map_err(query_error)?;

        let rows = sqlx::query(
            "SELECT id, user_message, ai_response, timestamp FROM chats ORDER BY timestamp DESC, id DESC",
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(query_error)?;

        let mut exchanges = Vec::with_capacity(rows.len());
        for row in &rows {
            let chat_row = ChatRow::from_row(row).map_err(query_error)?;
            exchanges.push(chat_row.into_exchange()?);
        }

        Ok(exchanges)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM chats")
            .fetch_one(&self.pool.reader)
            .await
            .map_err(query_error)?;

        let count: i64 = row.try_get("count").map_err(query_error)?;
        Ok(count as u64)
    }
}
