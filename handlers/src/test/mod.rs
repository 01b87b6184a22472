//! Unit test module
//!
//! Handler unit tests live here, separate from source files.

mod logging_handler_test;

use wcbot_core::{Chat, InboundMessage, User};

pub(crate) fn sample_message(chat_id: i64, text: Option<&str>) -> InboundMessage {
    InboundMessage::new(
        "msg-1",
        User {
            id: 1,
            username: Some("testuser".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        Chat::new(chat_id, "private"),
        text.map(str::to_string),
    )
}
