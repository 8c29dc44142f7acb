use super::*;
use shakmaty::CastlingMode;
use shakmaty::Chess;
use shakmaty::EnPassantMode;
use shakmaty::Move;
use shakmaty::Position;
use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;

/// Standard initial position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A chess position. Owned by the session; changed one validated move at a time.
#[derive(Debug, Clone, Default)]
pub struct Board {
    position: Chess,
}

impl Board {
    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        fen.trim()
            .parse::<Fen>()
            .map_err(|e| RulesError::InvalidPosition(format!("{}: {}", fen, e)))?
            .into_position::<Chess>(CastlingMode::Standard)
            .map(|position| Self { position })
            .map_err(|e| RulesError::InvalidPosition(format!("{}: {}", fen, e)))
    }
    pub fn fen(&self) -> String {
        Fen(self.position.clone().into_setup(EnPassantMode::Legal)).to_string()
    }
    pub fn turn(&self) -> Color {
        self.position.turn().into()
    }
    pub fn is_terminal(&self) -> bool {
        self.position.is_game_over()
    }
    pub fn outcome(&self) -> Option<Outcome> {
        self.position.outcome().map(Outcome::from)
    }
    pub fn legal(&self) -> Vec<Ply> {
        self.position
            .legal_moves()
            .iter()
            .filter_map(|m| Self::ply(m).ok())
            .collect()
    }
    pub fn is_legal(&self, ply: &Ply) -> bool {
        self.resolve(ply).is_ok()
    }
    /// Validates and applies one move. Leaves the board untouched on rejection.
    pub fn play(&mut self, ply: &Ply) -> Result<(), RulesError> {
        let m = self.resolve(ply)?;
        self.position.play_unchecked(&m);
        Ok(())
    }
}

impl Board {
    /// A promotion letter on a move that cannot promote is ignored,
    /// matching board widgets that always attach a default queen.
    fn resolve(&self, ply: &Ply) -> Result<Move, RulesError> {
        self.convert(ply).or_else(|e| match ply.promotion {
            Some(_) => self.convert(&ply.plain()).map_err(|_| e),
            None => Err(e),
        })
    }
    fn convert(&self, ply: &Ply) -> Result<Move, RulesError> {
        ply.uci()
            .parse::<UciMove>()
            .map_err(|_| RulesError::IllegalMove(ply.uci()))?
            .to_move(&self.position)
            .map_err(|_| RulesError::IllegalMove(ply.uci()))
    }
    fn ply(m: &Move) -> Result<Ply, String> {
        Ply::try_from(m.to_uci(CastlingMode::Standard).to_string().as_str())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.fen())
    }
}
