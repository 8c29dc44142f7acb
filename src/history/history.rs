use super::*;
use crate::rules::*;

/// Chronological move log for one session.
///
/// Remembers the position it started from so the whole log can be replayed
/// and every recorded position checked against the rules adapter.
#[derive(Debug, Clone, Default)]
pub struct History {
    initial: String,
    records: Vec<Record>,
}

impl History {
    pub fn new(initial: &Board) -> Self {
        Self {
            initial: initial.fen(),
            records: Vec::new(),
        }
    }
    pub fn append(&mut self, record: Record) {
        self.records.push(record);
    }
    /// Annotation of the most recent move, empty if there is none.
    pub fn latest_annotation(&self) -> &str {
        self.latest().map(|r| r.annotation.as_str()).unwrap_or("")
    }
    pub fn latest(&self) -> Option<&Record> {
        self.records.last()
    }
    pub fn len(&self) -> usize {
        self.records.len()
    }
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
    pub fn records(&self) -> &[Record] {
        &self.records
    }
    pub fn initial(&self) -> &str {
        &self.initial
    }
    /// Replays every move from the initial position.
    /// `Err(i)` names the first record whose move or resulting position does not check out.
    pub fn verify(&self) -> Result<(), usize> {
        let mut board = Board::from_fen(&self.initial).map_err(|_| 0usize)?;
        self.records.iter().enumerate().try_for_each(|(i, record)| {
            match board.play(&record.ply) {
                Ok(()) if board.fen() == record.fen => Ok(()),
                _ => Err(i),
            }
        })
    }
}
