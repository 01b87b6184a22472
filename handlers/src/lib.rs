//! # Handlers for the word-count bot
//!
//! This crate provides the handler implementations registered in the chain: logging, greeting
//! (`/start`, `/help`) and word count (plain text).

mod greeting;
mod logging;
mod word_count;

#[cfg(test)]
mod test;

pub use greeting::{GreetingHandler, GREETING_COMMANDS, WELCOME_TEXT};
pub use logging::LoggingHandler;
pub use word_count::{format_word_count, word_count, WordCountHandler};
