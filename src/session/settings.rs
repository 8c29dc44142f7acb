use std::time::Duration;

/// Runtime tuning for a session and its exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Pause before the random mover picks.
    pub random_settle: Duration,
    /// Pause before the AI mover asks the backend.
    pub ai_settle: Duration,
    /// How long a move request may wait for its answer. `None` waits forever.
    pub timeout: Option<Duration>,
    /// Send locally chosen moves to the backend and wait for the acknowledgement
    /// before the next mover goes. When off, local moves never touch the wire.
    pub forward_local_moves: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            random_settle: Duration::from_millis(crate::RANDOM_SETTLE_MS),
            ai_settle: Duration::from_millis(crate::AI_SETTLE_MS),
            timeout: Some(crate::RESPONSE_TIMEOUT),
            forward_local_moves: true,
        }
    }
}

impl Settings {
    /// No settling pauses. Meant for tests and headless play.
    pub fn instant() -> Self {
        Self {
            random_settle: Duration::ZERO,
            ai_settle: Duration::ZERO,
            timeout: Some(Duration::from_secs(1)),
            ..Self::default()
        }
    }
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
    pub fn with_forwarding(mut self, forward: bool) -> Self {
        self.forward_local_moves = forward;
        self
    }
}
