//! Chat exchange types for Confidant.
//!
//! A [`ChatExchange`] is one persisted conversational turn: the user's message
//! paired with the generated reply. Exchanges are written once and never
//! updated or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Surrogate key for a stored exchange, assigned by the store on insert.
///
/// Monotonically increasing and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExchangeId(pub i64);

impl fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExchangeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A persisted user message and the reply generated for it.
///
/// Only ever constructed by the store after a successful insert, so both
/// text fields are always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatExchange {
    pub id: ExchangeId,
    pub user_message: String,
    pub ai_response: String,
    /// Insertion time, set by the database column default.
    pub timestamp: DateTime<Utc>,
}

/// History projection of an exchange. The timestamp is left out on purpose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeSummary {
    pub id: ExchangeId,
    pub user_message: String,
    pub ai_response: String,
}

impl From<ChatExchange> for ExchangeSummary {
    fn from(exchange: ChatExchange) -> Self {
        Self {
            id: exchange.id,
            user_message: exchange.user_message,
            ai_response: exchange.ai_response,
        }
    }
}

/// Result of a successfully handled chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatOutcome {
    /// The generated reply, returned verbatim from the provider.
    pub response: String,
    /// Id assigned to the stored exchange.
    pub exchange_id: ExchangeId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_id_serializes_as_integer() {
        let json = serde_json::to_string(&ExchangeId(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn test_exchange_id_parse() {
        let id: ExchangeId = "17".parse().unwrap();
        assert_eq!(id, ExchangeId(17));
        assert!("abc".parse::<ExchangeId>().is_err());
    }

    #[test]
    fn test_summary_drops_timestamp() {
        let exchange = ChatExchange {
            id: ExchangeId(3),
            user_message: "hello".to_string(),
            ai_response: "hi".to_string(),
            timestamp: Utc::now(),
        };
        let summary = ExchangeSummary::from(exchange);
        let value = serde_json::to_value(&summary).unwrap();

        assert_eq!(value["id"], 3);
        assert_eq!(value["user_message"], "hello");
        assert_eq!(value["ai_response"], "hi");
        assert!(value.get("timestamp").is_none());
    }
}
