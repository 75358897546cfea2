//! Public types for the chat API
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ai::chat::Message;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ChatSession {
    pub id: Uuid,
    pub message_count: usize,
    pub busy: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ChatRequest {
    // A new session is started when omitted
    pub session_id: Option<Uuid>,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ChatResponse {
    pub session_id: Uuid,
    // `None` when the message was blank and ignored
    pub reply: Option<Message>,
    pub transcript: Vec<Message>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ChatSessionsResponse {
    pub sessions: Vec<ChatSession>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ChatTranscriptResponse {
    pub session_id: Uuid,
    pub transcript: Vec<Message>,
}
