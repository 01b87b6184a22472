//! Command-line interface. Config comes from env; `--token` overrides it.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "wcbot")]
#[command(about = "Telegram bot that counts the words in your messages", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot (config from env; token overrides TELEGRAM_BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_without_token() {
        let cli = Cli::try_parse_from(["wcbot", "run"]).unwrap();
        assert_eq!(cli.command, Commands::Run { token: None });
    }

    #[test]
    fn test_parse_run_with_token() {
        let cli = Cli::try_parse_from(["wcbot", "run", "--token", "abc"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Run {
                token: Some("abc".to_string())
            }
        );
        let cli = Cli::try_parse_from(["wcbot", "run", "-t", "xyz"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Run {
                token: Some("xyz".to_string())
            }
        );
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["wcbot"]).is_err());
        assert!(Cli::try_parse_from(["wcbot", "serve"]).is_err());
    }
}
