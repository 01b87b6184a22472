//! Handler that logs every message and the chain's outcome.

use async_trait::async_trait;
use tracing::{debug, info, instrument};
use wcbot_core::{Handler, HandlerResponse, InboundMessage, Result};

/// Logs each message in before() and the response in after(); always continues.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &InboundMessage) -> Result<bool> {
        match message.text.as_deref() {
            Some(text) => info!(
                user_id = message.user.id,
                username = %message.user.username.as_deref().unwrap_or("unknown"),
                chat_id = message.chat.id,
                message_content = %text,
                "Received message"
            ),
            None => info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                "Received non-text message"
            ),
        }
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &InboundMessage, response: &HandlerResponse) -> Result<()> {
        debug!(
            message_id = %message.id,
            response = ?response,
            "Processed message"
        );
        Ok(())
    }
}
