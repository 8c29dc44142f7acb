use super::*;
use crate::exchange::*;
use crate::history::*;
use crate::rules::*;
use crate::strategy::*;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::oneshot;

type Reply<T> = oneshot::Sender<Result<T, SessionError>>;

/// Everything the session actor reacts to, one at a time.
#[derive(Debug)]
pub enum Command {
    Start(GameConfig, Reply<Phase>),
    Play(Ply, Reply<Record>),
    Resume(Reply<Phase>),
    Snapshot(oneshot::Sender<Snapshot>),
    Watch(UnboundedSender<Notice>),
    /// A strategy invocation finished.
    Resolved {
        ticket: u64,
        result: Result<Resolution, ExchangeError>,
    },
    /// A local move's acknowledgement finished.
    Synced {
        ticket: u64,
        result: Result<Decision, ExchangeError>,
    },
}
