use super::*;
use crate::history::*;

/// Point-in-time copy of session state for display.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub fen: String,
    pub phase: Phase,
    pub history: History,
    /// Inbound messages the exchange has thrown away so far.
    pub discarded: usize,
}
