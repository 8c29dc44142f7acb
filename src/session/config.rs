use super::*;
use crate::exchange::*;
use crate::rules::*;
use crate::strategy::*;

/// Everything fixed at session start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub white: Strategy,
    pub black: Strategy,
    pub model: String,
    /// Only needed for paid providers. Never logged.
    pub api_key: String,
    /// Starting FEN; the standard position when absent.
    pub position: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            white: Strategy::Human,
            black: Strategy::Ai,
            model: crate::DEFAULT_MODEL.to_string(),
            api_key: String::new(),
            position: None,
        }
    }
}

impl GameConfig {
    pub fn new(white: Strategy, black: Strategy) -> Self {
        Self {
            white,
            black,
            ..Self::default()
        }
    }
    pub fn strategy(&self, color: Color) -> Strategy {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
    pub fn requires_key(&self) -> bool {
        self.model.starts_with(crate::PAID_MODEL_PREFIX)
    }
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.model.trim().is_empty() {
            return Err(SessionError::InvalidConfig("no model selected".to_string()));
        }
        if self.requires_key() && self.api_key.trim().is_empty() {
            return Err(SessionError::InvalidConfig(format!(
                "{} needs an API key",
                self.model
            )));
        }
        if !crate::KNOWN_MODELS.contains(&self.model.as_str()) {
            log::warn!("[session] model {} is not in the catalogue", self.model);
        }
        Ok(())
    }
    /// Initial board, parsed from `position` when one is given.
    pub fn board(&self) -> Result<Board, SessionError> {
        match self.position.as_deref() {
            Some(fen) => Ok(Board::from_fen(fen)?),
            None => Ok(Board::default()),
        }
    }
    /// The one-off message that opens the game on the backend.
    pub fn announcement(&self) -> ClientMessage {
        ClientMessage::Start {
            model_config: ModelConfig {
                model: self.model.clone(),
                api_key: self.api_key.clone(),
            },
            player_config: PlayerConfig {
                white_strategy: self.white,
                black_strategy: self.black,
            },
            initial_board_state: self.position.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn paid_model_needs_key() {
        let mut config = GameConfig::new(Strategy::Human, Strategy::Ai);
        config.model = "openai-gpt-4o".to_string();
        assert!(matches!(config.validate(), Err(SessionError::InvalidConfig(_))));
        config.api_key = "sk-test".to_string();
        assert_eq!(config.validate(), Ok(()));
    }
    #[test]
    fn local_model_needs_no_key() {
        let config = GameConfig::default();
        assert!(!config.requires_key());
        assert_eq!(config.validate(), Ok(()));
    }
    #[test]
    fn strategy_per_color() {
        let config = GameConfig::new(Strategy::Random, Strategy::Human);
        assert_eq!(config.strategy(Color::White), Strategy::Random);
        assert_eq!(config.strategy(Color::Black), Strategy::Human);
    }
    #[test]
    fn bad_position_is_rejected() {
        let config = GameConfig {
            position: Some("8/8/8 w".to_string()),
            ..GameConfig::default()
        };
        assert!(matches!(config.board(), Err(SessionError::InvalidPosition(_))));
    }
}
