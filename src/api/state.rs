use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::ai::chat::{Conversation, Session, SharedBackend};

pub struct AppState {
    pub backend: SharedBackend,
    // In-memory only, dropped when the server stops
    pub sessions: HashMap<Uuid, Arc<Conversation>>,
}

impl AppState {
    pub fn new(backend: SharedBackend) -> Self {
        Self {
            backend,
            sessions: HashMap::new(),
        }
    }

    pub fn get_or_create_session(&mut self, id: Uuid) -> Arc<Conversation> {
        let backend = Arc::clone(&self.backend);
        let conversation = self.sessions.entry(id).or_insert_with(|| {
            tracing::debug!("Creating chat session {}", id);
            Arc::new(Conversation::with_session(Session::with_id(id), backend))
        });
        Arc::clone(conversation)
    }

    pub fn find_session(&self, id: &Uuid) -> Option<Arc<Conversation>> {
        self.sessions.get(id).cloned()
    }
}
