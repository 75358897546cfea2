//! Router for the chat API

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use uuid::Uuid;

use super::public;
use crate::ai::chat::{Session, SubmitOutcome};
use crate::api::public::ApiError;
use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

/// Get a single chat session by ID
async fn chat_session(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let conversation = state
        .read()
        .expect("Unable to read share state")
        .find_session(&id);

    let Some(conversation) = conversation else {
        return Ok((
            StatusCode::NOT_FOUND,
            format!("Chat session {} not found", id),
        )
            .into_response());
    };

    Ok(Json(public::ChatTranscriptResponse {
        session_id: id,
        transcript: conversation.transcript(),
    })
    .into_response())
}

/// Get a list of all chat sessions, oldest first
async fn chat_list(
    State(state): State<SharedState>,
) -> Result<Json<public::ChatSessionsResponse>, ApiError> {
    let conversations: Vec<_> = state
        .read()
        .expect("Unable to read share state")
        .sessions
        .values()
        .cloned()
        .collect();

    let mut sessions: Vec<public::ChatSession> = conversations
        .iter()
        .map(|c| {
            let transcript = c.transcript();
            public::ChatSession {
                id: c.id(),
                message_count: transcript.len(),
                busy: c.is_busy(),
                created_at: transcript
                    .first()
                    .map(|m| m.created_at)
                    .unwrap_or_default(),
            }
        })
        .collect();
    sessions.sort_by_key(|s| s.created_at);

    Ok(Json(public::ChatSessionsResponse { sessions }))
}

/// Initiate or add to a chat session and wait for the reply
async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<public::ChatRequest>,
) -> Result<Json<public::ChatResponse>, ApiError> {
    let session_id = payload.session_id.unwrap_or_else(Uuid::new_v4);

    // Blank input leaves no trace, not even a new session
    if payload.message.trim().is_empty() {
        let existing = state
            .read()
            .expect("Unable to read share state")
            .find_session(&session_id);
        let transcript = match existing {
            Some(conversation) => conversation.transcript(),
            None => Session::with_id(session_id).messages().to_vec(),
        };
        return Ok(Json(public::ChatResponse {
            session_id,
            reply: None,
            transcript,
        }));
    }

    let conversation = state
        .write()
        .expect("Unable to write share state")
        .get_or_create_session(session_id);

    let reply = match conversation.submit(&payload.message).await? {
        SubmitOutcome::Replied(msg) => Some(msg),
        SubmitOutcome::Ignored => None,
    };

    Ok(Json(public::ChatResponse {
        session_id,
        reply,
        transcript: conversation.transcript(),
    }))
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", post(chat_handler))
        .route("/sessions", get(chat_list))
        .route("/{id}", get(chat_session))
}
