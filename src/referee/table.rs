use super::*;
use crate::exchange::*;
use crate::rules::*;
use crate::strategy::*;
use std::sync::Arc;

/// One connection's game as the referee sees it.
pub struct Table {
    board: Board,
    players: Option<PlayerConfig>,
    oracle: Arc<dyn Oracle>,
}

impl Table {
    pub fn new(oracle: Arc<dyn Oracle>) -> Self {
        Self {
            board: Board::default(),
            players: None,
            oracle,
        }
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    /// Handles one inbound frame and returns the reply to send, if any.
    pub async fn receive(&mut self, text: &str) -> Option<String> {
        match Protocol::decode_client(text) {
            Ok(ClientMessage::Start {
                model_config,
                player_config,
                initial_board_state,
            }) => {
                self.open(&model_config, player_config, initial_board_state.as_deref());
                None
            }
            Ok(ClientMessage::MoveRequest { ply, mover_color }) => {
                let reply = match ply.is_empty() {
                    true => self.decide(mover_color).await,
                    false => self.acknowledge(ply, mover_color),
                };
                Some(Protocol::encode(&reply))
            }
            Err(e) => {
                log::warn!("[referee] {}", e);
                None
            }
        }
    }
}

impl Table {
    fn open(&mut self, model: &ModelConfig, players: PlayerConfig, fen: Option<&str>) {
        self.board = fen
            .map(Board::from_fen)
            .transpose()
            .inspect_err(|e| log::warn!("[referee] {}, using the standard position", e))
            .ok()
            .flatten()
            .unwrap_or_default();
        log::info!(
            "[referee] new game: white {} vs black {} ({})",
            players.white_strategy,
            players.black_strategy,
            model.model
        );
        if players.white_strategy != Strategy::Ai && players.black_strategy != Strategy::Ai {
            log::debug!("[referee] no AI seat, only acknowledging");
        }
        self.players = Some(players);
    }
    /// Picks a move for `color` and plays it on the referee's board.
    async fn decide(&mut self, color: Color) -> ServerMessage {
        if self.players.is_none() {
            log::warn!("[referee] move requested before start");
        }
        if self.board.turn() != color {
            log::warn!("[referee] asked to move {} but {} is to play", color, self.board.turn());
        }
        match self.oracle.decide(&self.board, self.board.turn()).await {
            Some(decision) => match self.board.play(&decision.ply) {
                Ok(()) => ServerMessage::decided(decision.ply, &decision.annotation, Some(self.board.fen())),
                Err(e) => self.refuse(decision.ply, &e.to_string()),
            },
            None => self.refuse(Ply::empty(), "no legal moves"),
        }
    }
    /// Mirrors a locally chosen move back once it checks out.
    fn acknowledge(&mut self, ply: Ply, color: Color) -> ServerMessage {
        match self.board.play(&ply) {
            Ok(()) => {
                log::debug!("[referee] {} played {}", color, ply);
                ServerMessage::decided(ply, "", Some(self.board.fen()))
            }
            Err(e) => self.refuse(ply, &e.to_string()),
        }
    }
    fn refuse(&self, ply: Ply, reason: &str) -> ServerMessage {
        log::warn!("[referee] refusing {}: {}", ply, reason);
        ServerMessage::decided(ply, &format!("rejected: {}", reason), Some(self.board.fen()))
    }
}
