//! wcbot binary: loads `.env`, parses the CLI and runs the bot.

use anyhow::{Context, Result};
use clap::Parser;
use wcbot_cli::{run_bot, Cli, Commands};
use wcbot_telegram::TelegramConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = TelegramConfig::load(token)
                .context("Load config from .env or environment (TELEGRAM_BOT_TOKEN)")?;
            run_bot(config).await
        }
    }
}
