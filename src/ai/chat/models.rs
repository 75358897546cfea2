//! The core models for a chat session with the oracle.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const WELCOME_MESSAGE: &str = "✨ Welcome to the Cosmic Oracle! ✨\n\nI'm your personal guide to the mysteries of astrology and numerology. I can help you with:\n\n🌟 Birth chart interpretations\n🔮 Zodiac compatibility\n🌙 Moon phase guidance\n🔢 Numerology readings\n📊 Life path numbers\n⭐ Daily horoscopes\n\nWhat cosmic wisdom would you like to explore today?";

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Append-only transcript for one conversation. Ids are assigned in
/// append order starting at 1 with the welcome message, so they are
/// unique within the session and sort the same way as the log.
#[derive(Clone, Debug)]
pub struct Session {
    id: Uuid,
    messages: Vec<Message>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    pub fn with_id(id: Uuid) -> Self {
        let mut session = Self {
            id,
            messages: Vec::new(),
        };
        session.append(Role::Assistant, WELCOME_MESSAGE);
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn append(&mut self, role: Role, content: &str) -> &Message {
        let id = self.messages.last().map(|m| m.id + 1).unwrap_or(1);
        self.messages.push(Message {
            id,
            role,
            content: content.to_string(),
            created_at: Utc::now(),
        });
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }
}
