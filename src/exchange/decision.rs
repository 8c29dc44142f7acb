use crate::rules::*;

/// A move decided (or acknowledged) by the remote side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub ply: Ply,
    pub annotation: String,
    /// Backend's view of the board after the move, when it reports one.
    pub board: Option<String>,
}

impl Decision {
    pub fn new(ply: Ply, annotation: &str) -> Self {
        Self {
            ply,
            annotation: annotation.to_string(),
            board: None,
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.annotation.is_empty() {
            true => write!(f, "{}", self.ply),
            false => write!(f, "{} ({})", self.ply, self.annotation),
        }
    }
}
