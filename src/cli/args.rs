use crate::session::*;
use crate::strategy::*;
use clap::Parser;
use std::time::Duration;

/// Play chess against a backend with any mix of human, random and AI movers.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Backend websocket endpoint
    #[arg(long, env = "CHESS_SERVER_URL", default_value = crate::DEFAULT_SERVER_URL)]
    pub url: String,
    #[arg(long, env = "CHESS_WHITE", value_enum, default_value_t = Strategy::Human)]
    pub white: Strategy,
    #[arg(long, env = "CHESS_BLACK", value_enum, default_value_t = Strategy::Ai)]
    pub black: Strategy,
    /// Model the backend should use for AI moves
    #[arg(long, env = "CHESS_MODEL", default_value = crate::DEFAULT_MODEL)]
    pub model: String,
    /// Required for openai-* models
    #[arg(long, env = "OPENAI_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,
    /// Starting position as FEN
    #[arg(long, env = "CHESS_FEN")]
    pub fen: Option<String>,
    /// Seconds to wait for a move response; 0 waits forever
    #[arg(long, default_value_t = crate::RESPONSE_TIMEOUT.as_secs())]
    pub timeout: u64,
    /// Keep human and random moves off the wire
    #[arg(long)]
    pub no_forward: bool,
}

impl Args {
    pub fn config(&self) -> GameConfig {
        GameConfig {
            white: self.white,
            black: self.black,
            model: self.model.clone(),
            api_key: self.api_key.clone(),
            position: self.fen.clone().filter(|fen| !fen.trim().is_empty()),
        }
    }
    pub fn settings(&self) -> Settings {
        let settings = Settings::default().with_forwarding(!self.no_forward);
        match self.timeout {
            0 => Settings {
                timeout: None,
                ..settings
            },
            secs => settings.with_timeout(Duration::from_secs(secs)),
        }
    }
}
