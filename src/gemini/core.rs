use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::CompletionError;

pub const TEMPERATURE: f64 = 0.8;
pub const TOP_K: u32 = 40;
pub const TOP_P: f64 = 0.95;
pub const MAX_OUTPUT_TOKENS: u32 = 1024;

// {
//   "candidates": [{
//     "content": {"parts": [{"text": "..."}], "role": "model"},
//     "finishReason": "STOP",
//     "index": 0
//   }],
//   "usageMetadata": {...},
//   "modelVersion": "gemini-2.0-flash"
// }
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    pub fn text(text: &str) -> Self {
        Part {
            text: Some(text.to_string()),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: TEMPERATURE,
            top_k: TOP_K,
            top_p: TOP_P,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        }
    }
}

#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// A single-turn request: one content entry with one text part.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part::text(prompt)],
            }],
            generation_config: GenerationConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if there is one.
    pub fn first_candidate_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

/// Calls `generateContent` once. A 400 is reported as an
/// authentication failure since that is what Gemini returns for a bad
/// key; any other non-2xx is a plain status failure.
pub async fn generate_content(
    client: &reqwest::Client,
    request: &GenerateContentRequest,
    api_hostname: &str,
    api_key: &str,
    model: &str,
    timeout: Duration,
) -> Result<GenerateContentResponse, CompletionError> {
    let url = format!(
        "{}/v1beta/models/{}:generateContent",
        api_hostname.trim_end_matches("/"),
        model
    );
    let response = client
        .post(url)
        .query(&[("key", api_key)])
        .header("Content-Type", "application/json")
        .timeout(timeout)
        .json(request)
        .send()
        .await?;

    let status = response.status();
    if status == StatusCode::BAD_REQUEST {
        return Err(CompletionError::Authentication(status));
    }
    if !status.is_success() {
        return Err(CompletionError::Status(status));
    }

    let body = response.text().await?;
    serde_json::from_str::<GenerateContentResponse>(&body)
        .map_err(|e| CompletionError::MalformedPayload(format!("{}: {}", e, body)))
}
