use super::*;
use crate::exchange::*;
use crate::rules::*;
use crate::session::Settings;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Deserialize;
use serde::Serialize;

/// How one color's moves are chosen.
///
/// - `Human` never acts on its own; moves arrive as external drops
/// - `Random` settles briefly, then picks uniformly among legal moves
/// - `Ai` settles briefly, then asks the backend with an empty move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Human,
    Random,
    Ai,
}

impl Strategy {
    pub async fn resolve(
        self,
        color: Color,
        board: &Board,
        exchange: &Exchange,
        settings: &Settings,
    ) -> Result<Resolution, ExchangeError> {
        match self {
            Self::Human => Ok(Resolution::Wait),
            Self::Random => {
                tokio::time::sleep(settings.random_settle).await;
                let choice = Self::sample(board, &mut rand::rng());
                log::debug!("[strategy] random {} picked {:?}", color, choice);
                Ok(choice.map_or(Resolution::Exhausted, Resolution::Local))
            }
            Self::Ai => {
                tokio::time::sleep(settings.ai_settle).await;
                match board.is_terminal() {
                    true => Ok(Resolution::Exhausted),
                    false => exchange
                        .request(Ply::empty(), color)
                        .await
                        .map(Resolution::Remote),
                }
            }
        }
    }
    /// Uniform pick from the legal-move set; `None` once the game is over.
    pub fn sample<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Ply> {
        match board.is_terminal() {
            true => None,
            false => board.legal().choose(rng).cloned(),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "random" => Ok(Self::Random),
            "ai" => Ok(Self::Ai),
            _ => Err(format!("unknown strategy: {}", s)),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Random => write!(f, "random"),
            Self::Ai => write!(f, "ai"),
        }
    }
}
