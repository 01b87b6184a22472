//! Greeting handler: answers `/start` and `/help` with a fixed welcome text.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};
use wcbot_core::{
    Handler, HandlerError, HandlerResponse, InboundMessage, MessageShape, OutboundReply, Result,
};

/// Commands answered with [`WELCOME_TEXT`].
pub const GREETING_COMMANDS: &[&str] = &["start", "help"];

/// Fixed welcome reply describing what the bot does.
pub const WELCOME_TEXT: &str = "Привет! Я бот для подсчета слов в переписке. \
Отправьте мне сообщение, и я посчитаю количество слов в нем.";

/// Replies to greeting commands. Commands mentioning another bot (`/start@other_bot`) are ignored once
/// the own username is known.
#[derive(Clone, Default)]
pub struct GreetingHandler {
    bot_username: Arc<RwLock<Option<String>>>,
}

impl GreetingHandler {
    /// Creates a handler sharing the username cache the runner fills from `getMe`.
    pub fn new(bot_username: Arc<RwLock<Option<String>>>) -> Self {
        Self { bot_username }
    }

    /// Builds the welcome reply for the message's chat. Only the chat id is used.
    pub fn reply_for(message: &InboundMessage) -> std::result::Result<OutboundReply, HandlerError> {
        OutboundReply::new(message.chat.clone(), WELCOME_TEXT)
    }
}

#[async_trait]
impl Handler for GreetingHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &InboundMessage) -> Result<HandlerResponse> {
        let shape = message.shape();
        let MessageShape::Command { name, .. } = shape else {
            return Ok(HandlerResponse::Ignore);
        };
        if !GREETING_COMMANDS.contains(&name) {
            return Ok(HandlerResponse::Ignore);
        }

        let addressed = {
            let username = self.bot_username.read().await;
            shape.is_addressed_to(username.as_deref())
        };
        if !addressed {
            debug!(chat_id = message.chat.id, command = %name, "Command addressed to another bot");
            return Ok(HandlerResponse::Ignore);
        }

        info!(chat_id = message.chat.id, command = %name, "Greeting");
        Ok(HandlerResponse::Reply(Self::reply_for(message)?))
    }
}
