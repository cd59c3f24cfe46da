//! `POST /api/chat`: prepend the assistant context and relay one completion.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use log::{debug, error};

use super::protocol::{ChatReply, ChatRequest, CompletionRequest, ErrorBody, Message};
use super::upstream::CompletionBackend;
use crate::error::ChatError;
use crate::params::UpstreamConfig;

/// Stateless relay between visitors and the completion backend
pub struct ChatService {
    backend: Arc<dyn CompletionBackend>,
    system_context: String,
    upstream: UpstreamConfig,
}

impl ChatService {
    pub fn new(
        backend: Arc<dyn CompletionBackend>,
        system_context: impl Into<String>,
        upstream: UpstreamConfig,
    ) -> Self {
        Self {
            backend,
            system_context: system_context.into(),
            upstream,
        }
    }

    /// System context first, then the visitor's text
    pub fn build_request(&self, user_text: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.upstream.model.clone(),
            messages: vec![
                Message::system(self.system_context.as_str()),
                Message::user(user_text),
            ],
            temperature: self.upstream.temperature,
            max_tokens: self.upstream.max_tokens,
        }
    }

    /// One upstream call per message, no retries
    pub async fn get_assistant_reply(&self, user_text: &str) -> Result<String, ChatError> {
        if user_text.trim().is_empty() {
            return Err(ChatError::BadRequest);
        }
        let request = self.build_request(user_text);
        Ok(self.backend.complete(&request).await?)
    }
}

/// Router exposing the chat endpoint
pub fn router(service: Arc<ChatService>) -> Router {
    Router::new()
        .route(
            "/api/chat",
            post(chat_handler).fallback(method_not_allowed),
        )
        .with_state(service)
}

async fn chat_handler(
    State(service): State<Arc<ChatService>>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let result = match body {
        Ok(Json(request)) => service.get_assistant_reply(&request.message).await,
        Err(rejection) => {
            debug!("rejected chat body: {}", rejection);
            Err(ChatError::BadRequest)
        }
    };

    match result {
        Ok(response) => (StatusCode::OK, Json(ChatReply { response })).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn method_not_allowed() -> Response {
    ChatError::MethodNotAllowed.into_response()
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let status = match &self {
            ChatError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ChatError::BadRequest => StatusCode::BAD_REQUEST,
            ChatError::Upstream(e) => {
                error!("chat completion failed: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorBody {
            error: self.public_message().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UpstreamError;
    use axum::body::Body;
    use axum::http::Request;
    use futures::future::BoxFuture;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tower::ServiceExt;

    /// Canned backend that records what it was asked
    struct StubBackend {
        reply: Result<String, String>,
        calls: AtomicUsize,
        last: Mutex<Option<CompletionRequest>>,
    }

    impl StubBackend {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
                last: Mutex::new(None),
            })
        }

        fn failing(detail: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(detail.to_string()),
                calls: AtomicUsize::new(0),
                last: Mutex::new(None),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl CompletionBackend for StubBackend {
        fn complete<'a>(
            &'a self,
            request: &'a CompletionRequest,
        ) -> BoxFuture<'a, Result<String, UpstreamError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(request.clone());
            let reply = self.reply.clone().map_err(UpstreamError::Other);
            Box::pin(async move { reply })
        }
    }

    fn app(backend: Arc<StubBackend>) -> Router {
        let service = ChatService::new(backend, "You are a test.", UpstreamConfig::default());
        router(Arc::new(service))
    }

    async fn send(app: Router, method: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri("/api/chat")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_post_returns_completion() {
        let backend = StubBackend::replying("Hello!");
        let (status, body) = send(app(backend.clone()), "POST", r#"{"message":"Hi"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "response": "Hello!" }));
        assert_eq!(backend.calls(), 1);

        let sent = backend.last.lock().unwrap().clone().unwrap();
        assert_eq!(
            sent.messages,
            vec![Message::system("You are a test."), Message::user("Hi")]
        );
        assert_eq!(sent.model, "llama-3.3-70b-versatile");
        assert_eq!(sent.max_tokens, 500);
    }

    #[tokio::test]
    async fn test_empty_completion_is_success() {
        let backend = StubBackend::replying("");
        let (status, body) = send(app(backend), "POST", r#"{"message":"Hi"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "response": "" }));
    }

    #[tokio::test]
    async fn test_other_methods_rejected_without_upstream_call() {
        for method in ["GET", "PUT", "DELETE"] {
            let backend = StubBackend::replying("unused");
            let (status, body) = send(app(backend.clone()), method, "").await;

            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{}", method);
            assert_eq!(body, json!({ "error": "Method not allowed" }));
            assert_eq!(backend.calls(), 0);
        }
    }

    #[tokio::test]
    async fn test_upstream_failure_is_generic() {
        let backend = StubBackend::failing("connect to 10.0.0.1 with key sk-123 failed");
        let (status, body) = send(app(backend), "POST", r#"{"message":"Hi"}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to get response from AI" }));
    }

    #[tokio::test]
    async fn test_bad_bodies_rejected_without_upstream_call() {
        for raw in [r#"{"message":"   "}"#, r#"{"text":"Hi"}"#, "not json"] {
            let backend = StubBackend::replying("unused");
            let (status, body) = send(app(backend.clone()), "POST", raw).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", raw);
            assert_eq!(body, json!({ "error": "Message is required" }));
            assert_eq!(backend.calls(), 0);
        }
    }

    #[tokio::test]
    async fn test_service_reply_directly() {
        let backend = StubBackend::replying("Sure.");
        let service = ChatService::new(backend, "ctx", UpstreamConfig::default());

        assert_eq!(service.get_assistant_reply("Hello").await.unwrap(), "Sure.");
        assert!(matches!(
            service.get_assistant_reply("").await,
            Err(ChatError::BadRequest)
        ));
    }
}
