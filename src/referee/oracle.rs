use crate::exchange::*;
use crate::rules::*;
use rand::seq::IndexedRandom;

/// Anything that can pick a move for the side to play.
///
/// The referee is indifferent to where the decision comes from:
/// local sampling, an engine process, or a language model behind an API.
#[async_trait::async_trait]
pub trait Oracle: Send + Sync {
    /// Choose a move for `color`. `None` when there is nothing legal to play.
    async fn decide(&self, board: &Board, color: Color) -> Option<Decision>;
}

/// Oracle that plays uniformly at random among legal moves.
pub struct Fish;

#[async_trait::async_trait]
impl Oracle for Fish {
    async fn decide(&self, board: &Board, color: Color) -> Option<Decision> {
        let ref mut rng = rand::rng();
        board.legal().choose(rng).cloned().map(|ply| {
            let annotation = format!("AI {} player: {} to {}", color, ply.from, ply.to);
            Decision::new(ply, &annotation)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[tokio::test]
    async fn fish_plays_legal_and_annotates() {
        let board = Board::default();
        let decision = Fish.decide(&board, Color::White).await.unwrap();
        assert!(board.is_legal(&decision.ply));
        assert!(decision.annotation.starts_with("AI white player: "));
    }
    #[tokio::test]
    async fn fish_has_nothing_to_say_after_mate() {
        let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(Fish.decide(&board, Color::Black).await, None);
    }
}
