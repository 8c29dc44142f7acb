use crate::exchange::*;
use crate::rules::*;

/// What a strategy produced for the color it was invoked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing to do until an external move drop arrives.
    Wait,
    /// Chosen locally; to be applied, recorded, then acknowledged.
    Local(Ply),
    /// Decided remotely; to be validated and applied with its annotation.
    Remote(Decision),
    /// No legal move exists.
    Exhausted,
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wait => write!(f, "wait"),
            Self::Local(ply) => write!(f, "local {}", ply),
            Self::Remote(decision) => write!(f, "remote {}", decision),
            Self::Exhausted => write!(f, "exhausted"),
        }
    }
}
