use std::time::Duration;

use async_trait::async_trait;

use super::core::{GenerateContentRequest, generate_content};
use crate::ai::chat::CompletionBackend;
use crate::core::AppConfig;
use crate::error::CompletionError;

/// Sends prompts to Gemini's `generateContent` endpoint.
#[derive(Clone, Debug)]
pub struct GeminiBackend {
    client: reqwest::Client,
    api_hostname: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl GeminiBackend {
    pub fn new(api_hostname: &str, api_key: &str, model: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            timeout,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            &config.gemini_api_hostname,
            &config.gemini_api_key,
            &config.gemini_model,
            Duration::from_secs(config.request_timeout_secs),
        )
    }
}

#[async_trait]
impl CompletionBackend for GeminiBackend {
    async fn generate(&self, prompt: &str) -> Result<String, CompletionError> {
        let request = GenerateContentRequest::from_prompt(prompt);
        let resp = generate_content(
            &self.client,
            &request,
            &self.api_hostname,
            &self.api_key,
            &self.model,
            self.timeout,
        )
        .await?;

        resp.first_candidate_text()
            .map(str::to_string)
            .ok_or_else(|| {
                CompletionError::MalformedPayload(format!(
                    "response has no candidate text ({} candidates)",
                    resp.candidates.len()
                ))
            })
    }
}
