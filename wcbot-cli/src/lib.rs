//! # wcbot
//!
//! Word-count Telegram bot application: CLI definition and the wiring of config, handlers,
//! dispatcher and REPL.

pub mod cli;
pub mod runner;

pub use cli::{Cli, Commands};
pub use runner::{build_handler_chain, run_bot};
