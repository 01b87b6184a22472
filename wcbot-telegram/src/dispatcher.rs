//! Reply dispatcher: runs the handler chain for one inbound message and delivers the resulting reply.

use std::sync::Arc;

use handler_chain::HandlerChain;
use tracing::{debug, info, instrument};
use wcbot_core::{Bot, HandlerResponse, InboundMessage, OutboundReply, Result};

/// Handler chain plus the [`Bot`] replies are delivered through. Cheap to clone (one per update).
#[derive(Clone)]
pub struct ReplyDispatcher {
    chain: HandlerChain,
    bot: Arc<dyn Bot>,
}

impl ReplyDispatcher {
    pub fn new(chain: HandlerChain, bot: Arc<dyn Bot>) -> Self {
        Self { chain, bot }
    }

    /// Runs the chain and sends its reply, if any. Returns the delivered reply. Delivery failures
    /// are returned as-is; nothing is retried.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = %message.id))]
    pub async fn dispatch(&self, message: &InboundMessage) -> Result<Option<OutboundReply>> {
        match self.chain.handle(message).await? {
            HandlerResponse::Reply(reply) => {
                self.bot.send_message(reply.chat(), reply.text()).await?;
                info!(
                    chat_id = reply.chat().id,
                    reply_len = reply.text().chars().count(),
                    "Reply sent"
                );
                Ok(Some(reply))
            }
            response => {
                debug!(response = ?response, "No reply for message");
                Ok(None)
            }
        }
    }
}
