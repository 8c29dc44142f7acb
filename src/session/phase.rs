use crate::rules::*;
use crate::strategy::*;

/// Where the turn loop stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// `color` is to move and its strategy has been, or is about to be, invoked.
    Awaiting { color: Color, strategy: Strategy },
    /// A local move by `color` is applied and recorded; its acknowledgement is in flight.
    Syncing { color: Color },
    /// Absorbing.
    Over(Outcome),
}

impl Phase {
    pub fn is_over(&self) -> bool {
        matches!(self, Self::Over(_))
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Awaiting { color, strategy } => write!(f, "{} to move ({})", color, strategy),
            Self::Syncing { color } => write!(f, "syncing {} move", color),
            Self::Over(outcome) => write!(f, "{}", outcome),
        }
    }
}
