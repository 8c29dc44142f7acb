use super::*;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Color),
    Draw,
}

impl From<shakmaty::Outcome> for Outcome {
    fn from(outcome: shakmaty::Outcome) -> Self {
        match outcome {
            shakmaty::Outcome::Decisive { winner } => Self::Winner(winner.into()),
            shakmaty::Outcome::Draw => Self::Draw,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Winner(Color::White) => write!(f, "White player wins!"),
            Self::Winner(Color::Black) => write!(f, "Black player wins!"),
            Self::Draw => write!(f, "Draw!"),
        }
    }
}
