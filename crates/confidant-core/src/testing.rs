//! In-memory fakes for the repository and provider ports.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use confidant_types::error::RepositoryError;
use confidant_types::exchange::{ChatExchange, ExchangeId};
use confidant_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, StopReason, Usage,
};

use crate::llm::provider::LlmProvider;
use crate::repository::exchange::ExchangeRepository;

/// Provider that answers every request with a fixed reply, or fails.
pub struct StubProvider {
    reply: Option<String>,
    calls: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<CompletionRequest>>>,
}

impl StubProvider {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Arc::new(AtomicUsize::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    pub fn last_request(&self) -> Arc<Mutex<Option<CompletionRequest>>> {
        Arc::clone(&self.last_request)
    }
}

impl LlmProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());

        match &self.reply {
            Some(reply) => Ok(CompletionResponse {
                id: "stub-response".to_string(),
                content: reply.clone(),
                model: request.model.clone(),
                stop_reason: StopReason::EndTurn,
                usage: Usage::default(),
            }),
            None => Err(LlmError::Provider {
                message: "stub provider failure".to_string(),
            }),
        }
    }
}

/// Vec-backed exchange store. Clones share the same rows.
#[derive(Clone, Default)]
pub struct InMemoryExchangeRepository {
    rows: Arc<Mutex<Vec<ChatExchange>>>,
    fail_inserts: bool,
}

impl InMemoryExchangeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose inserts always fail with a query error.
    pub fn rejecting_writes() -> Self {
        Self {
            rows: Arc::new(Mutex::new(Vec::new())),
            fail_inserts: true,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

impl ExchangeRepository for InMemoryExchangeRepository {
    async fn insert(
        &self,
        user_message: &str,
        ai_response: &str,
    ) -> Result<ChatExchange, RepositoryError> {
        if self.fail_inserts {
            return Err(RepositoryError::Query("disk I/O error".to_string()));
        }

        let mut rows = self.rows.lock().unwrap();
        let exchange = ChatExchange {
            id: ExchangeId(rows.len() as i64 + 1),
            user_message: user_message.to_string(),
            ai_response: ai_response.to_string(),
            timestamp: Utc::now(),
        };
        rows.push(exchange.clone());
        Ok(exchange)
    }

    async fn list_all(&self) -> Result<Vec<ChatExchange>, RepositoryError> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.rows.lock().unwrap().len() as u64)
    }
}
