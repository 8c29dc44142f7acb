//! Append-only record of applied moves.
mod history;
mod record;

pub use history::*;
pub use record::*;
