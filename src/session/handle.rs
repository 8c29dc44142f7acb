use super::*;
use crate::exchange::*;
use crate::history::*;
use crate::rules::*;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;
use tokio::sync::oneshot;

/// Cloneable front door to a running session.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    mailbox: UnboundedSender<Command>,
}

impl From<UnboundedSender<Command>> for SessionHandle {
    fn from(mailbox: UnboundedSender<Command>) -> Self {
        Self { mailbox }
    }
}

impl SessionHandle {
    /// Fresh exchange over `link` and a session around it.
    pub fn open(link: Link, settings: Settings) -> Self {
        let exchange = Exchange::new(link, settings.timeout);
        Orchestrator::spawn(exchange, settings)
    }
    pub async fn start(&self, config: GameConfig) -> Result<Phase, SessionError> {
        self.ask(|tx| Command::Start(config, tx)).await?
    }
    /// Drops a human move onto the board.
    pub async fn play(&self, ply: Ply) -> Result<Record, SessionError> {
        self.ask(|tx| Command::Play(ply, tx)).await?
    }
    pub async fn resume(&self) -> Result<Phase, SessionError> {
        self.ask(Command::Resume).await?
    }
    pub async fn snapshot(&self) -> Result<Snapshot, SessionError> {
        self.ask(Command::Snapshot).await
    }
    /// Subscribes to notices from now on.
    pub fn watch(&self) -> Result<UnboundedReceiver<Notice>, SessionError> {
        let (tx, rx) = unbounded_channel();
        self.mailbox
            .send(Command::Watch(tx))
            .map_err(|_| SessionError::Closed)?;
        Ok(rx)
    }
}

impl SessionHandle {
    async fn ask<T, F>(&self, command: F) -> Result<T, SessionError>
    where
        F: FnOnce(oneshot::Sender<T>) -> Command,
    {
        let (tx, rx) = oneshot::channel();
        self.mailbox
            .send(command(tx))
            .map_err(|_| SessionError::Closed)?;
        rx.await.map_err(|_| SessionError::Closed)
    }
}
