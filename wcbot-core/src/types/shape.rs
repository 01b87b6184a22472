//! Message shape: tagged variant used to route an inbound message to its handler.

/// Longest command name accepted by the text fallback.
const MAX_COMMAND_LEN: usize = 32;

/// What an inbound message looks like from the router's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageShape<'a> {
    /// `/name[@mention] [args]`. `name` excludes the slash, `mention` excludes the `@`.
    Command {
        name: &'a str,
        mention: Option<&'a str>,
        args: &'a str,
    },
    /// Text that is not a command.
    Text(&'a str),
    /// No text payload (photo, sticker, location, ...).
    Other,
}

impl<'a> MessageShape<'a> {
    /// Classifies a text payload without transport metadata, detecting the command token with
    /// [`MessageShape::command_token`].
    pub fn classify(text: &'a str) -> Self {
        Self::with_command(text, Self::command_token(text))
    }

    /// Classifies a text payload given the command token at its start, as marked by the transport
    /// (Telegram's `bot_command` entity at offset 0). No token, or a token the text does not start
    /// with, means plain text.
    pub fn with_command(text: &'a str, command: Option<&str>) -> Self {
        let Some(token) = command.filter(|t| text.starts_with(*t)) else {
            return MessageShape::Text(text);
        };
        let head = &text[..token.len()];
        let Some(head) = head.strip_prefix('/') else {
            return MessageShape::Text(text);
        };

        let (name, mention) = match head.split_once('@') {
            Some((name, mention)) => (name, Some(mention).filter(|m| !m.is_empty())),
            None => (head, None),
        };
        if name.is_empty() {
            return MessageShape::Text(text);
        }

        MessageShape::Command {
            name,
            mention,
            args: text[token.len()..].trim(),
        }
    }

    /// Finds the command token at the start of `text` the way Telegram marks one: `/`, then
    /// 1..=32 of `[A-Za-z0-9_]`, then optionally `@` and a username. The token ends at the first
    /// other character, so `/start,hello` yields `/start`.
    pub fn command_token(text: &str) -> Option<&str> {
        let rest = text.strip_prefix('/')?;
        let name_len = word_len(rest);
        if name_len == 0 || name_len > MAX_COMMAND_LEN {
            return None;
        }

        let mut end = 1 + name_len;
        if let Some(after_at) = text[end..].strip_prefix('@') {
            end += 1 + word_len(after_at);
        }
        Some(&text[..end])
    }

    /// Returns true unless this is a command explicitly addressed to another bot.
    /// An unknown own username accepts every mention.
    pub fn is_addressed_to(&self, bot_username: Option<&str>) -> bool {
        match (self, bot_username) {
            (
                MessageShape::Command {
                    mention: Some(mention),
                    ..
                },
                Some(username),
            ) => mention.eq_ignore_ascii_case(username.trim_start_matches('@')),
            _ => true,
        }
    }
}

/// Byte length of the leading run of `[A-Za-z0-9_]`.
fn word_len(s: &str) -> usize {
    s.find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(s.len())
}
