use crate::rules::*;
use serde::Serialize;

/// One applied move with the position it produced. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(rename = "move")]
    pub ply: Ply,
    pub color: Color,
    #[serde(rename = "resultingBoardState")]
    pub fen: String,
    pub annotation: String,
}

impl Record {
    pub fn new(ply: Ply, color: Color, fen: String, annotation: &str) -> Self {
        Self {
            ply,
            color,
            fen,
            annotation: annotation.to_string(),
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.color, self.ply)?;
        if !self.annotation.is_empty() {
            write!(f, "  {}", self.annotation)?;
        }
        Ok(())
    }
}
