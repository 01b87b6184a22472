//! Core types: user, chat, inbound message and its shape, outbound reply, handler response, and Handler trait.
//!
//! Types are split into one file per main type.

mod chat;
mod handler;
mod message;
mod reply;
mod response;
mod shape;
mod user;

pub use chat::Chat;
pub use handler::{Handler, ToCoreUser, ToInboundMessage};
pub use message::InboundMessage;
pub use reply::OutboundReply;
pub use response::HandlerResponse;
pub use shape::MessageShape;
pub use user::User;
