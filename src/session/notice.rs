use super::*;
use crate::history::*;
use crate::rules::*;
use crate::strategy::*;

/// Broadcast to every watcher as the session moves along.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Started { fen: String },
    Moved(Record),
    Turn { color: Color, strategy: Strategy },
    /// The strategy for `color` failed; `resume` retries it.
    Stalled {
        color: Color,
        strategy: Strategy,
        error: SessionError,
    },
    Over(Outcome),
}
