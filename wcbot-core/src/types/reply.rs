//! Outbound reply type.

use crate::error::HandlerError;

use super::chat::Chat;

/// A reply produced by a handler and handed to the dispatcher for delivery. Text is never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundReply {
    chat: Chat,
    text: String,
}

impl OutboundReply {
    /// Builds a reply; blank text is rejected with [`HandlerError::EmptyContent`].
    pub fn new(chat: Chat, text: impl Into<String>) -> Result<Self, HandlerError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(HandlerError::EmptyContent);
        }
        Ok(Self { chat, text })
    }

    pub fn chat(&self) -> &Chat {
        &self.chat
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
