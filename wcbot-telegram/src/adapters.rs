//! Adapters from Telegram (teloxide) types to wcbot_core types.

use teloxide::types::MessageEntityKind;
use wcbot_core::{Chat, InboundMessage, ToCoreUser, ToInboundMessage, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`InboundMessage`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToInboundMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> InboundMessage {
        InboundMessage {
            id: self.0.id.0.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(User::anonymous),
            chat: Chat::new(self.0.chat.id.0, self.chat_type()),
            text: self.0.text().map(str::to_string),
            command: self.command_token().map(str::to_string),
            created_at: self.0.date,
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    /// Text covered by a `bot_command` entity at offset 0, if any. Telegram only marks commands it
    /// recognizes, so `/привет` carries no entity while `/start,hello` marks `/start`.
    fn command_token(&self) -> Option<&'a str> {
        let text = self.0.text()?;
        let entity = self
            .0
            .entities()?
            .iter()
            .find(|e| e.offset == 0 && matches!(e.kind, MessageEntityKind::BotCommand))?;
        utf16_prefix(text, entity.length)
    }

    fn chat_type(&self) -> &'static str {
        let chat = &self.0.chat;
        if chat.is_private() {
            "private"
        } else if chat.is_group() {
            "group"
        } else if chat.is_supergroup() {
            "supergroup"
        } else if chat.is_channel() {
            "channel"
        } else {
            "unknown"
        }
    }
}

/// Prefix of `text` spanning `units` UTF-16 code units (Telegram's entity unit), or None when the
/// length does not fall on a character boundary or exceeds the text.
fn utf16_prefix(text: &str, units: usize) -> Option<&str> {
    let mut seen = 0;
    for (idx, c) in text.char_indices() {
        if seen == units {
            return Some(&text[..idx]);
        }
        if seen > units {
            return None;
        }
        seen += c.len_utf16();
    }
    (seen == units).then_some(text)
}
