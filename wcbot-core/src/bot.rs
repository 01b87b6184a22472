//! Bot abstraction for delivering replies.
//!
//! [`Bot`] is transport-agnostic; wcbot-telegram implements it on top of teloxide and tests substitute
//! a recording mock.

use crate::error::Result;
use crate::types::{Chat, InboundMessage};
use async_trait::async_trait;

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat. Resolves once the transport accepted the message.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &InboundMessage, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
}
