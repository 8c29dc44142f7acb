/// Failures of the move exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    /// The connection is not open (yet, or any more).
    ChannelNotReady,
    /// Another request is still waiting for its answer.
    AlreadyPending,
    /// The answer never came: timed out, or the connection closed mid-request.
    LostResponse,
    /// Inbound message with nothing to correlate it to, or of unknown kind.
    UnexpectedMessage(String),
}

impl std::fmt::Display for ExchangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChannelNotReady => write!(f, "connection is not open"),
            Self::AlreadyPending => write!(f, "a move request is already pending"),
            Self::LostResponse => write!(f, "no response to move request"),
            Self::UnexpectedMessage(s) => write!(f, "unexpected message: {}", s),
        }
    }
}

impl std::error::Error for ExchangeError {}
