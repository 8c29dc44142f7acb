/// Errors raised by the rules adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    InvalidPosition(String),
    IllegalMove(String),
}

impl std::fmt::Display for RulesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPosition(s) => write!(f, "invalid position: {}", s),
            Self::IllegalMove(s) => write!(f, "illegal move: {}", s),
        }
    }
}

impl std::error::Error for RulesError {}
