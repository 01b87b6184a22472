//! # wcbot-core
//!
//! Core types and traits for the word-count bot: [`Bot`], [`Handler`], inbound message and outbound
//! reply types, message shape classification, and tracing initialization. Transport-agnostic; used by
//! wcbot-telegram, handler-chain and wcbot-handlers.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{HandlerError, Result, WcbotError};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, InboundMessage, MessageShape, OutboundReply, ToCoreUser,
    ToInboundMessage, User,
};
