//! Plain-text projection of a transcript for the terminal.
use chrono::{DateTime, Local, Utc};

use super::models::{Message, Role};

pub const ASSISTANT_LABEL: &str = "Cosmic Oracle";
pub const USER_LABEL: &str = "You";
pub const TYPING_INDICATOR: &str = "✨ Consulting the stars...";

pub fn format_time(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%H:%M").to_string()
}

pub fn render_message(msg: &Message) -> String {
    let label = match msg.role {
        Role::User => USER_LABEL,
        Role::Assistant => ASSISTANT_LABEL,
    };
    format!("{} · {}\n{}\n", label, format_time(&msg.created_at), msg.content)
}

pub fn render_transcript(messages: &[Message]) -> String {
    messages
        .iter()
        .map(render_message)
        .collect::<Vec<_>>()
        .join("\n")
}
