//! REPL runner: converts teloxide messages to core InboundMessage and hands them to the
//! [`ReplyDispatcher`]. Calls get_me first to populate the bot username cache.

use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};
use wcbot_core::ToInboundMessage;

use super::adapters::TelegramMessageWrapper;
use super::dispatcher::ReplyDispatcher;

/// Asks the Bot API who we are and stores the username in `bot_username`. Returns the username;
/// on failure the cache is left untouched, so mentioned commands are not filtered.
#[instrument(skip(bot, bot_username))]
pub async fn fetch_bot_username(
    bot: &teloxide::Bot,
    bot_username: &RwLock<Option<String>>,
) -> Option<String> {
    match bot.get_me().await {
        Ok(me) => {
            let username = me.user.username.clone()?;
            *bot_username.write().await = Some(username.clone());
            info!(username = %username, "Bot username set before repl");
            Some(username)
        }
        Err(e) => {
            warn!(error = %e, "get_me failed; mentioned commands will not be filtered");
            None
        }
    }
}

/// Starts long polling with the given teloxide Bot, dispatcher and bot_username cache. Returns when
/// the REPL stops (Ctrl-C).
/// Each message is converted to an InboundMessage and dispatched on its own task.
#[instrument(skip(bot, dispatcher, bot_username))]
pub async fn run_repl(
    bot: teloxide::Bot,
    dispatcher: ReplyDispatcher,
    bot_username: Arc<RwLock<Option<String>>>,
) -> Result<()> {
    fetch_bot_username(&bot, &bot_username).await;

    teloxide::repl(bot, move |_bot: teloxide::Bot, msg: Message| {
        let dispatcher = dispatcher.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            tokio::spawn(async move {
                if let Err(e) = dispatcher.dispatch(&core_msg).await {
                    error!(
                        error = %e,
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        "Dispatch failed"
                    );
                }
            });

            respond(())
        }
    })
    .await;

    info!("REPL stopped");
    Ok(())
}
