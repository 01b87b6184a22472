//! Mock implementation of [`wcbot_core::Bot`] for integration tests.
//!
//! Records `send_message` calls so tests can assert on delivered replies without hitting Telegram.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::mpsc;
use wcbot_core::{Bot, Chat, Result, WcbotError};

/// One recorded call to `send_message(chat, text)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRecord {
    pub chat_id: i64,
    pub text: String,
}

/// Mock Bot that records sends; optionally fails every send.
pub struct MockBot {
    send_tx: mpsc::UnboundedSender<SendRecord>,
    fail: bool,
}

impl MockBot {
    /// Creates a MockBot and returns the receiver for send records.
    pub fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<SendRecord>) {
        let (send_tx, send_rx) = mpsc::unbounded_channel();
        (Arc::new(Self { send_tx, fail: false }), send_rx)
    }

    /// Creates a MockBot whose sends always fail (still recorded).
    pub fn failing() -> (Arc<Self>, mpsc::UnboundedReceiver<SendRecord>) {
        let (send_tx, send_rx) = mpsc::unbounded_channel();
        (Arc::new(Self { send_tx, fail: true }), send_rx)
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        let _ = self.send_tx.send(SendRecord {
            chat_id: chat.id,
            text: text.to_string(),
        });
        if self.fail {
            return Err(WcbotError::Bot("Forbidden: bot was blocked by the user".to_string()));
        }
        Ok(())
    }
}
