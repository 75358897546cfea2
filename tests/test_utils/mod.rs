//! Test utilities for integration tests
#![allow(dead_code)]
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use axum::{Router, body::Body};
use tokio::sync::Notify;

use cosmic_oracle::ai::chat::{CompletionBackend, SharedBackend};
use cosmic_oracle::api::AppState;
use cosmic_oracle::api::app;
use cosmic_oracle::core::AppConfig;
use cosmic_oracle::error::CompletionError;
use cosmic_oracle::gemini::GeminiBackend;

pub const GEMINI_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

pub fn test_config(api_hostname: &str) -> AppConfig {
    AppConfig {
        gemini_api_hostname: api_hostname.to_string(),
        gemini_api_key: String::from("test-api-key"),
        gemini_model: String::from("gemini-2.0-flash"),
        request_timeout_secs: 5,
    }
}

/// Creates a test application router answering with `backend`.
pub fn test_app(backend: SharedBackend) -> Router {
    let app_state = AppState::new(backend);
    app(Arc::new(RwLock::new(app_state)))
}

/// Creates a test application router that talks to a (mock) Gemini
/// server at `api_hostname`.
pub fn test_app_with_gemini(api_hostname: &str) -> Router {
    let config = test_config(api_hostname);
    let backend = Arc::new(GeminiBackend::from_config(&config));
    app(Arc::new(RwLock::new(AppState::new(backend))))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

pub fn gemini_reply(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": {"parts": [{"text": text}], "role": "model"},
            "finishReason": "STOP",
            "index": 0
        }]
    })
    .to_string()
}

/// Replies with a fixed text.
pub struct EchoBackend(pub &'static str);

#[async_trait]
impl CompletionBackend for EchoBackend {
    async fn generate(&self, _prompt: &str) -> Result<String, CompletionError> {
        Ok(self.0.to_string())
    }
}

/// Blocks every call until `release` is notified. `started` fires
/// when a call begins.
#[derive(Default)]
pub struct GatedBackend {
    pub started: Notify,
    pub release: Notify,
}

#[async_trait]
impl CompletionBackend for GatedBackend {
    async fn generate(&self, _prompt: &str) -> Result<String, CompletionError> {
        self.started.notify_one();
        self.release.notified().await;
        Ok(String::from("The stars have spoken."))
    }
}
