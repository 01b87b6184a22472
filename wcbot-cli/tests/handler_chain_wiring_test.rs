//! Tests for the production handler chain built by [`wcbot_cli::build_handler_chain`].

use std::sync::Arc;

use handlers::WELCOME_TEXT;
use tokio::sync::RwLock;
use wcbot_cli::build_handler_chain;
use wcbot_core::{Chat, HandlerResponse, InboundMessage, User};

fn message(text: Option<&str>) -> InboundMessage {
    InboundMessage::new(
        "1",
        User::anonymous(),
        Chat::new(100, "group"),
        text.map(str::to_string),
    )
}

fn reply_text(response: &HandlerResponse) -> Option<&str> {
    response.reply().map(|r| r.text())
}

#[tokio::test]
async fn test_start_is_greeted_not_counted() {
    let chain = build_handler_chain(Arc::new(RwLock::new(None)));

    let response = chain.handle(&message(Some("/start"))).await.unwrap();

    assert_eq!(reply_text(&response), Some(WELCOME_TEXT));
}

#[tokio::test]
async fn test_text_is_counted() {
    let chain = build_handler_chain(Arc::new(RwLock::new(None)));

    let response = chain
        .handle(&message(Some("one two three four five")))
        .await
        .unwrap();

    assert_eq!(reply_text(&response), Some("В вашем сообщении 5 слов."));
}

#[tokio::test]
async fn test_unrouted_messages_get_no_reply() {
    let chain = build_handler_chain(Arc::new(RwLock::new(Some("wcbot".to_string()))));

    for text in [None, Some("/unknown"), Some("/start@other_bot")] {
        let response = chain.handle(&message(text)).await.unwrap();
        assert_eq!(response, HandlerResponse::Continue, "text: {:?}", text);
    }
}
