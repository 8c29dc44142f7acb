use crate::rules::*;
use crate::strategy::*;
use serde::Deserialize;
use serde::Serialize;

/// Messages sent from client to backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ClientMessage {
    /// Opens the game on the backend. Sent once per session.
    #[serde(rename_all = "camelCase")]
    Start {
        model_config: ModelConfig,
        player_config: PlayerConfig,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        initial_board_state: Option<String>,
    },
    /// Asks the backend to decide (empty move) or acknowledge (concrete move).
    #[serde(rename_all = "camelCase")]
    MoveRequest {
        #[serde(rename = "move")]
        ply: Ply,
        mover_color: Color,
    },
}

/// Messages sent from backend to client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ServerMessage {
    /// Answer to the pending move request.
    #[serde(rename_all = "camelCase")]
    MoveDecided {
        #[serde(rename = "move")]
        ply: Ply,
        #[serde(default, alias = "comment")]
        annotation: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        board_state: Option<String>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelConfig {
    pub model: String,
    #[serde(default)]
    pub api_key: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerConfig {
    pub white_strategy: Strategy,
    pub black_strategy: Strategy,
}

impl ClientMessage {
    pub fn request(ply: Ply, color: Color) -> Self {
        Self::MoveRequest {
            ply,
            mover_color: color,
        }
    }
}

impl ServerMessage {
    pub fn decided(ply: Ply, annotation: &str, board: Option<String>) -> Self {
        Self::MoveDecided {
            ply,
            annotation: annotation.to_string(),
            board_state: board,
        }
    }
}
