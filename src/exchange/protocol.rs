use super::*;

/// Handles message encoding and decoding.
/// Centralizes the protocol layer between internal types and wire format.
pub struct Protocol;

impl Protocol {
    pub fn encode<T>(msg: &T) -> String
    where
        T: serde::Serialize,
    {
        serde_json::to_string(msg).expect("serialize wire message")
    }
    /// Parses an inbound frame. Anything that is not a known server message is unexpected.
    pub fn decode(text: &str) -> Result<ServerMessage, ExchangeError> {
        serde_json::from_str(text).map_err(|_| ExchangeError::UnexpectedMessage(text.to_string()))
    }
    /// Backend side of the same protocol.
    pub fn decode_client(text: &str) -> Result<ClientMessage, ExchangeError> {
        serde_json::from_str(text).map_err(|_| ExchangeError::UnexpectedMessage(text.to_string()))
    }
}
