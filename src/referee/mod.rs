//! Practice backend speaking the client's wire protocol.
//!
//! Tracks its own board per connection, acknowledges concrete move requests and
//! answers empty ones through an [`Oracle`].
mod oracle;
mod server;
mod table;

pub use oracle::*;
pub use server::*;
pub use table::*;
