//! Word-count handler: replies to plain text with the number of whitespace-delimited words.

use async_trait::async_trait;
use tracing::{info, instrument};
use wcbot_core::{
    Handler, HandlerError, HandlerResponse, InboundMessage, MessageShape, OutboundReply, Result,
};

/// Counts maximal runs of non-whitespace characters. Purely whitespace-based, so numbers,
/// punctuation, emoji and any script count one word per run.
pub fn word_count(text: &str) -> usize {
    text.split(is_separator).filter(|tok| !tok.is_empty()).count()
}

/// Unicode whitespace plus the information separators U+001C..=U+001F, which Python's
/// `str.split()` also treats as whitespace.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Reply text for a given count.
pub fn format_word_count(count: usize) -> String {
    format!("В вашем сообщении {} слов.", count)
}

/// Replies to every plain-text message with its word count. Commands and non-text messages are
/// ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct WordCountHandler;

impl WordCountHandler {
    pub fn new() -> Self {
        Self
    }

    /// Builds the count reply for the message's chat. A message without text is rejected with
    /// [`HandlerError::NoText`].
    pub fn reply_for(message: &InboundMessage) -> std::result::Result<OutboundReply, HandlerError> {
        let text = message.text.as_deref().ok_or(HandlerError::NoText)?;
        OutboundReply::new(message.chat.clone(), format_word_count(word_count(text)))
    }
}

#[async_trait]
impl Handler for WordCountHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &InboundMessage) -> Result<HandlerResponse> {
        match message.shape() {
            MessageShape::Text(text) => {
                let reply = Self::reply_for(message)?;
                info!(
                    chat_id = message.chat.id,
                    words = word_count(text),
                    "Counted words"
                );
                Ok(HandlerResponse::Reply(reply))
            }
            MessageShape::Command { .. } | MessageShape::Other => Ok(HandlerResponse::Ignore),
        }
    }
}
