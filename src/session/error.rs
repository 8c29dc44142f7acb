use crate::exchange::ExchangeError;
use crate::rules::RulesError;

/// Why a session command was refused or a turn could not complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    NotStarted,
    AlreadyStarted,
    /// The mover is not human, or the previous move is still being acknowledged.
    OutOfTurn,
    Finished,
    InvalidConfig(String),
    InvalidPosition(String),
    IllegalMove(String),
    Exchange(ExchangeError),
    /// The session task is gone.
    Closed,
}

impl From<ExchangeError> for SessionError {
    fn from(e: ExchangeError) -> Self {
        Self::Exchange(e)
    }
}

impl From<RulesError> for SessionError {
    fn from(e: RulesError) -> Self {
        match e {
            RulesError::InvalidPosition(s) => Self::InvalidPosition(s),
            RulesError::IllegalMove(s) => Self::IllegalMove(s),
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotStarted => write!(f, "session has not started"),
            Self::AlreadyStarted => write!(f, "session already started"),
            Self::OutOfTurn => write!(f, "not accepting a move right now"),
            Self::Finished => write!(f, "game is over"),
            Self::InvalidConfig(s) => write!(f, "invalid config: {}", s),
            Self::InvalidPosition(s) => write!(f, "invalid position: {}", s),
            Self::IllegalMove(s) => write!(f, "illegal move: {}", s),
            Self::Exchange(e) => write!(f, "{}", e),
            Self::Closed => write!(f, "session closed"),
        }
    }
}

impl std::error::Error for SessionError {}
