use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use handlebars::Handlebars;
use uuid::Uuid;

use super::models::{Message, Role, Session};
use crate::ai::prompt;
use crate::error::CompletionError;

pub const AUTH_ERROR_REPLY: &str = "🌙 Please check your Gemini API key configuration. The cosmic connection needs proper authentication! ✨";
pub const GENERIC_ERROR_REPLY: &str = "🌙 The cosmic energies seem disrupted at the moment. Please try again. The stars will align soon! ✨";

/// Turns a rendered prompt into reply text. Implemented by
/// `gemini::GeminiBackend`; tests swap in their own.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, CompletionError>;
}

pub type SharedBackend = Arc<dyn CompletionBackend>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("a completion is already in flight")]
pub struct Busy;

/// The fixed text shown in place of a reply when a completion fails.
/// Only a rejected key gets its own text; the error kind still tells
/// the rest apart in the logs.
pub fn fallback_reply(err: &CompletionError) -> &'static str {
    match err {
        CompletionError::Authentication(_) => AUTH_ERROR_REPLY,
        CompletionError::Status(_)
        | CompletionError::Transport(_)
        | CompletionError::MalformedPayload(_)
        | CompletionError::Prompt(_) => GENERIC_ERROR_REPLY,
    }
}

/// Issues one completion per user turn and never lets a failure
/// escape: errors are logged and replaced by a fallback reply. At most
/// one call is outstanding per client.
pub struct CompletionClient {
    backend: SharedBackend,
    templates: Handlebars<'static>,
    in_flight: AtomicBool,
}

/// Held while a call is outstanding. Dropping it, including by
/// dropping an unfinished `complete` future, frees the slot.
pub struct InFlight<'a> {
    client: &'a CompletionClient,
}

impl CompletionClient {
    pub fn new(backend: SharedBackend) -> Self {
        Self {
            backend,
            templates: prompt::templates(),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn try_acquire(&self) -> Result<InFlight<'_>, Busy> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| Busy)?;
        Ok(InFlight { client: self })
    }

    /// Returns the first candidate's text verbatim, or the fallback
    /// reply for the failure. Fails fast with `Busy` if another call
    /// from this client has not settled yet.
    pub async fn complete(&self, user_text: &str) -> Result<String, Busy> {
        let token = self.try_acquire()?;
        Ok(token.complete(user_text).await)
    }

    async fn try_complete(&self, user_text: &str) -> Result<String, CompletionError> {
        let prompt = prompt::render_oracle(&self.templates, user_text)?;
        self.backend.generate(&prompt).await
    }
}

impl InFlight<'_> {
    pub async fn complete(self, user_text: &str) -> String {
        match self.client.try_complete(user_text).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(kind = e.kind(), "Completion failed: {}", e);
                fallback_reply(&e).to_string()
            }
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.client.in_flight.store(false, Ordering::Release);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Blank input. Nothing was appended and the endpoint was not called.
    Ignored,
    Replied(Message),
}

/// One session log plus the client that answers it.
pub struct Conversation {
    id: Uuid,
    session: Mutex<Session>,
    client: CompletionClient,
}

impl Conversation {
    pub fn new(backend: SharedBackend) -> Self {
        Self::with_session(Session::new(), backend)
    }

    pub fn with_session(session: Session, backend: SharedBackend) -> Self {
        Self {
            id: session.id(),
            session: Mutex::new(session),
            client: CompletionClient::new(backend),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_busy(&self) -> bool {
        self.client.is_busy()
    }

    pub fn transcript(&self) -> Vec<Message> {
        self.session
            .lock()
            .expect("Unable to lock session")
            .messages()
            .to_vec()
    }

    /// Runs one user turn: append the user's text, ask for a reply,
    /// append the reply (or fallback). The text is stored as typed;
    /// trimming only decides whether it is blank.
    pub async fn submit(&self, text: &str) -> Result<SubmitOutcome, Busy> {
        if text.trim().is_empty() {
            return Ok(SubmitOutcome::Ignored);
        }

        let token = self.client.try_acquire()?;
        self.append(Role::User, text);

        let reply = token.complete(text).await;
        Ok(SubmitOutcome::Replied(self.append(Role::Assistant, &reply)))
    }

    fn append(&self, role: Role, content: &str) -> Message {
        let mut session = self.session.lock().expect("Unable to lock session");
        session.append(role, content).clone()
    }
}
