//! # wcbot-telegram
//!
//! Telegram layer: adapters from teloxide types, [`wcbot_core::Bot`] implementation, config, the reply
//! dispatcher (handler chain + delivery) and the REPL runner. No handler logic lives here.

mod adapters;
mod bot_adapter;
mod config;
mod dispatcher;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::{TelegramConfig, DEFAULT_LOG_FILE};
pub use dispatcher::ReplyDispatcher;
pub use runner::{fetch_bot_username, run_repl};
