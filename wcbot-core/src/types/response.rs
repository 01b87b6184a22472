//! Handler chain result type.

use super::reply::OutboundReply;

/// Handler result for the chain. `Reply` carries the reply so the dispatcher can deliver it and
/// later handlers can inspect it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no reply.
    Stop,
    /// Message is not for this handler, try next.
    Ignore,
    /// Stop the chain and deliver this reply.
    Reply(OutboundReply),
}

impl HandlerResponse {
    /// Returns the reply, if any.
    pub fn reply(&self) -> Option<&OutboundReply> {
        match self {
            HandlerResponse::Reply(reply) => Some(reply),
            _ => None,
        }
    }
}
