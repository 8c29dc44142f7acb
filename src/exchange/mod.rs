//! Move exchange with the remote collaborator.
//!
//! One persistent, message-oriented connection per session. Outbound messages are
//! [`ClientMessage`]s, the only inbound kind understood is [`ServerMessage::MoveDecided`].
//!
//! ## Core Types
//!
//! - [`Link`] — Text-message pipe, either a websocket bridge or an in-memory pair
//! - [`Exchange`] — Single-flight request/response correlation on top of a link
//! - [`Protocol`] — JSON encoding and decoding of wire messages
//! - [`Decision`] — What the remote side decided for a pending request
mod decision;
mod error;
mod exchange;
mod link;
mod message;
mod protocol;

pub use decision::*;
pub use error::*;
pub use exchange::*;
pub use link::*;
pub use message::*;
pub use protocol::*;
