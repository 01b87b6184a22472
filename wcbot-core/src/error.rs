//! Error types for the bot core.
//!
//! [`WcbotError`] is the top-level error; [`HandlerError`] is used for handler failures.

use thiserror::Error;

/// Top-level error for wcbot (bot transport, handler, config).
#[derive(Error, Debug)]
pub enum WcbotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("Config error: {0}")]
    Config(String),
}

/// Errors produced by handlers (no text, empty reply).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HandlerError {
    #[error("No text in message")]
    NoText,

    #[error("Empty content")]
    EmptyContent,
}

/// Result type for core operations; uses [`WcbotError`].
pub type Result<T> = std::result::Result<T, WcbotError>;
