//! Inbound message type for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, shape::MessageShape, user::User};

/// A single inbound message: who sent it, where, and its text (absent for non-text messages).
/// Built per update by the transport adapter and dropped once the handler chain finished.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub text: Option<String>,
    /// Command token the text starts with (e.g. `/start@wcbot`), as marked by the transport.
    pub command: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl InboundMessage {
    /// Creates a message received now. Without transport metadata the command token is detected
    /// from the text itself.
    pub fn new(id: impl Into<String>, user: User, chat: Chat, text: Option<String>) -> Self {
        let command = text
            .as_deref()
            .and_then(MessageShape::command_token)
            .map(str::to_string);
        Self {
            id: id.into(),
            user,
            chat,
            text,
            command,
            created_at: Utc::now(),
        }
    }

    /// Classifies the message for routing: command, plain text, or other.
    pub fn shape(&self) -> MessageShape<'_> {
        match self.text.as_deref() {
            Some(text) => MessageShape::with_command(text, self.command.as_deref()),
            None => MessageShape::Other,
        }
    }
}
