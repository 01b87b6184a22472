//! Wires config, handlers, dispatcher and the REPL together.

use std::sync::Arc;

use anyhow::Result;
use handler_chain::HandlerChain;
use handlers::{GreetingHandler, LoggingHandler, WordCountHandler};
use tokio::sync::RwLock;
use tracing::{info, instrument};
use wcbot_core::init_tracing;
use wcbot_telegram::{run_repl, ReplyDispatcher, TelegramBotAdapter, TelegramConfig};

/// Chain: logging → greeting (`/start`, `/help`) → word count (plain text).
pub fn build_handler_chain(bot_username: Arc<RwLock<Option<String>>>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(GreetingHandler::new(bot_username)))
        .add_handler(Arc::new(WordCountHandler::new()))
}

/// Main entry: init logging, build the teloxide bot and handler chain, then run the REPL until Ctrl-C.
/// `config` must come from [`TelegramConfig::load`] so a missing token fails before this point.
#[instrument(skip(config))]
pub async fn run_bot(config: TelegramConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    let teloxide_bot = config.build_bot()?;
    let bot_username = Arc::new(RwLock::new(None));
    let dispatcher = ReplyDispatcher::new(
        build_handler_chain(bot_username.clone()),
        Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())),
    );

    info!(
        telegram_api_url = ?config.telegram_api_url,
        log_file = %config.log_file,
        "Bot started successfully"
    );

    run_repl(teloxide_bot, dispatcher, bot_username).await
}
