use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while turning one user utterance into
/// one reply. None of these reach a renderer; see
/// `ai::chat::fallback_reply`.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("invalid API key or request format (status {0})")]
    Authentication(StatusCode),
    #[error("API request failed with status {0}")]
    Status(StatusCode),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    #[error("prompt rendering failed: {0}")]
    Prompt(#[from] handlebars::RenderError),
}

impl CompletionError {
    /// Short label used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            CompletionError::Authentication(_) => "authentication",
            CompletionError::Status(_) => "status",
            CompletionError::Transport(_) => "transport",
            CompletionError::MalformedPayload(_) => "malformed_payload",
            CompletionError::Prompt(_) => "prompt",
        }
    }
}
