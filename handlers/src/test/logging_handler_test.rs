//! Unit tests for LoggingHandler.

use super::sample_message;
use crate::LoggingHandler;
use wcbot_core::{Handler, HandlerResponse};

#[tokio::test]
async fn test_logging_handler_before_continues() {
    let h = LoggingHandler;
    assert!(h.before(&sample_message(1, Some("hello"))).await.unwrap());
    assert!(h.before(&sample_message(1, None)).await.unwrap());
}

#[tokio::test]
async fn test_logging_handler_does_not_claim_message() {
    let response = LoggingHandler.handle(&sample_message(1, Some("hello"))).await.unwrap();
    assert_eq!(response, HandlerResponse::Continue);
}

#[tokio::test]
async fn test_logging_handler_after_ok() {
    let result = LoggingHandler
        .after(&sample_message(1, Some("hello")), &HandlerResponse::Stop)
        .await;
    assert!(result.is_ok());
}
