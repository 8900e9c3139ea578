//! Axum router configuration with middleware.
//!
//! Routes keep their trailing slashes: `/chat/` and `/chats/`.
//! Middleware: CORS, tracing.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chat/", post(handlers::chat::post_chat))
        .route("/chats/", get(handlers::chat::list_chats))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use confidant_core::llm::box_provider::BoxLlmProvider;
    use confidant_core::llm::provider::LlmProvider;
    use confidant_infra::sqlite::pool::DatabasePool;
    use confidant_types::config::ServiceConfig;
    use confidant_types::llm::{
        CompletionRequest, CompletionResponse, LlmError, StopReason, Usage,
    };

    use super::*;

    /// Provider answering every request with the same text, or failing.
    struct CannedProvider {
        reply: Option<&'static str>,
        calls: Arc<AtomicUsize>,
    }

    impl LlmProvider for CannedProvider {
        fn name(&self) -> &str {
            "canned"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.reply {
                Some(text) => Ok(CompletionResponse {
                    id: "canned-1".to_string(),
                    content: text.to_string(),
                    model: request.model.clone(),
                    stop_reason: StopReason::EndTurn,
                    usage: Usage::default(),
                }),
                None => Err(LlmError::RateLimited {
                    retry_after_ms: None,
                }),
            }
        }
    }

    struct TestApp {
        router: Router,
        state: AppState,
        pool: DatabasePool,
        calls: Arc<AtomicUsize>,
        _dir: tempfile::TempDir,
    }

    async fn test_app(reply: Option<&'static str>) -> TestApp {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("api.db").display());
        let pool = DatabasePool::new(&url).await.unwrap();

        let calls = Arc::new(AtomicUsize::new(0));
        let provider = BoxLlmProvider::new(CannedProvider {
            reply,
            calls: Arc::clone(&calls),
        });
        let state = AppState::from_parts(pool.clone(), provider, &ServiceConfig::default());

        TestApp {
            router: build_router(state.clone()),
            state,
            pool,
            calls,
            _dir: dir,
        }
    }

    async fn send(router: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_chat(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/chat/")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_chats() -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri("/chats/")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_chat_then_history_round_trip() {
        let app = test_app(Some("That sounds hard — tell me more.")).await;

        let (status, body) = send(&app.router, post_chat(r#"{"message":"I feel anxious today"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({ "response": "That sounds hard — tell me more." })
        );

        let (status, body) = send(&app.router, get_chats()).await;
        assert_eq!(status, StatusCode::OK);
        let chats = body["chats"].as_array().unwrap();
        assert_eq!(chats.len(), 1);
        assert!(chats[0]["id"].is_i64());
        assert_eq!(chats[0]["user_message"], "I feel anxious today");
        assert_eq!(chats[0]["ai_response"], "That sounds hard — tell me more.");
        assert!(chats[0].get("timestamp").is_none());
    }

    #[tokio::test]
    async fn test_empty_message_returns_error_payload_with_ok_status() {
        let app = test_app(Some("unused")).await;

        for body in [r#"{"message":""}"#, r#"{"message":"   "}"#, r#"{}"#, r#"{"message":null}"#] {
            let (status, json) = send(&app.router, post_chat(body)).await;
            assert_eq!(status, StatusCode::OK, "body: {body}");
            assert_eq!(json, serde_json::json!({ "error": "No message provided" }));
        }

        assert_eq!(app.calls.load(Ordering::SeqCst), 0);
        let (_, history) = send(&app.router, get_chats()).await;
        assert_eq!(history, serde_json::json!({ "chats": [] }));
    }

    #[tokio::test]
    async fn test_history_is_newest_first() {
        let app = test_app(Some("noted")).await;

        for message in ["first", "second", "third"] {
            let body = serde_json::json!({ "message": message }).to_string();
            send(&app.router, post_chat(&body)).await;
        }

        let (_, body) = send(&app.router, get_chats()).await;
        let order: Vec<&str> = body["chats"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["user_message"].as_str().unwrap())
            .collect();
        assert_eq!(order, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_provider_failure_is_server_error_and_stores_nothing() {
        let app = test_app(None).await;

        let (status, body) = send(&app.router, post_chat(r#"{"message":"hello"}"#)).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body["error"].as_str().unwrap().contains("rate limited"));
        assert_eq!(app.calls.load(Ordering::SeqCst), 1);

        assert_eq!(app.state.history_service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_storage_failure_still_returns_generated_reply() {
        let app = test_app(Some("here is what I think")).await;
        app.pool.writer.close().await;

        let (status, body) = send(&app.router, post_chat(r#"{"message":"hello"}"#)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["response"], "here is what I think");
        assert!(body["error"].as_str().unwrap().starts_with("Storage error"));
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = test_app(None).await;
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(&app.router, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}
