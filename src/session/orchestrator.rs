use super::*;
use crate::exchange::*;
use crate::history::*;
use crate::rules::*;
use crate::strategy::*;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::WeakUnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

/// Single source of truth for one game.
///
/// Owns the board, the history and the phase, and processes one [`Command`] at a time.
/// Strategy invocations and acknowledgements never run inline: they are spawned with the
/// current turn ticket and report back through the mailbox, so a slow backend never
/// blocks snapshots or input. A completion carrying an old ticket is dropped.
///
/// Ordering within a turn:
/// - human and random moves are applied and recorded, then acknowledged
/// - AI moves are requested, then applied and recorded
pub struct Orchestrator {
    exchange: Arc<Exchange>,
    settings: Settings,
    config: GameConfig,
    board: Board,
    history: History,
    phase: Phase,
    ticket: u64,
    inflight: bool,
    mailbox: WeakUnboundedSender<Command>,
    commands: UnboundedReceiver<Command>,
    watchers: Vec<UnboundedSender<Notice>>,
}

impl Orchestrator {
    /// Starts the session task around a fresh exchange. The task ends once every handle is dropped.
    pub fn spawn(exchange: Exchange, settings: Settings) -> SessionHandle {
        let (tx, rx) = unbounded_channel();
        let session = Self {
            exchange: Arc::new(exchange),
            settings,
            config: GameConfig::default(),
            board: Board::default(),
            history: History::default(),
            phase: Phase::Idle,
            ticket: 0,
            inflight: false,
            mailbox: tx.downgrade(),
            commands: rx,
            watchers: Vec::new(),
        };
        tokio::spawn(session.run());
        SessionHandle::from(tx)
    }
    async fn run(mut self) {
        while let Some(command) = self.commands.recv().await {
            self.handle(command);
        }
        log::debug!("[session] all handles dropped, stopping");
    }
    fn handle(&mut self, command: Command) {
        match command {
            Command::Start(config, reply) => {
                let result = self.start(config);
                reply.send(result).ok();
            }
            Command::Play(ply, reply) => {
                let result = self.play(ply);
                reply.send(result).ok();
            }
            Command::Resume(reply) => {
                let result = self.resume();
                reply.send(result).ok();
            }
            Command::Snapshot(reply) => {
                reply.send(self.snapshot()).ok();
            }
            Command::Watch(watcher) => self.watchers.push(watcher),
            Command::Resolved { ticket, result } => self.resolved(ticket, result),
            Command::Synced { ticket, result } => self.synced(ticket, result),
        }
    }
}

impl Orchestrator {
    fn start(&mut self, config: GameConfig) -> Result<Phase, SessionError> {
        if self.phase != Phase::Idle {
            return Err(SessionError::AlreadyStarted);
        }
        config.validate()?;
        let board = config.board()?;
        self.exchange.announce(&config.announcement())?;
        log::info!(
            "[session] started: white {} vs black {} ({})",
            config.white,
            config.black,
            config.model
        );
        self.history = History::new(&board);
        self.board = board;
        self.config = config;
        self.broadcast(Notice::Started {
            fen: self.board.fen(),
        });
        self.advance();
        Ok(self.phase)
    }
    /// External drop for a human mover. Illegal drops change nothing and send nothing.
    fn play(&mut self, ply: Ply) -> Result<Record, SessionError> {
        let color = match self.phase {
            Phase::Idle => return Err(SessionError::NotStarted),
            Phase::Over(_) => return Err(SessionError::Finished),
            Phase::Syncing { .. } => return Err(SessionError::OutOfTurn),
            Phase::Awaiting { strategy, .. } if strategy != Strategy::Human => {
                return Err(SessionError::OutOfTurn);
            }
            Phase::Awaiting { color, .. } => color,
        };
        let record = self
            .apply(ply.clone(), color, "")
            .inspect_err(|e| log::info!("[session] rejected drop {}: {}", ply, e))?;
        self.ticket += 1;
        self.inflight = false;
        self.sync(color, ply);
        Ok(record)
    }
    /// Re-invokes the current mover's strategy if nothing is in flight.
    fn resume(&mut self) -> Result<Phase, SessionError> {
        match self.phase {
            Phase::Idle => Err(SessionError::NotStarted),
            Phase::Over(_) => Err(SessionError::Finished),
            Phase::Syncing { .. } => Ok(self.phase),
            Phase::Awaiting { .. } if self.inflight => Ok(self.phase),
            Phase::Awaiting { color, strategy } => {
                log::info!("[session] resuming {} ({})", color, strategy);
                self.dispatch();
                Ok(self.phase)
            }
        }
    }
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            fen: self.board.fen(),
            phase: self.phase,
            history: self.history.clone(),
            discarded: self.exchange.discarded(),
        }
    }
}

impl Orchestrator {
    /// Decides who moves next after any completed move.
    fn advance(&mut self) {
        if self.board.is_terminal() {
            let outcome = self.board.outcome().unwrap_or(Outcome::Draw);
            return self.finish(outcome);
        }
        let color = self.board.turn();
        let strategy = self.config.strategy(color);
        self.phase = Phase::Awaiting { color, strategy };
        self.broadcast(Notice::Turn { color, strategy });
        self.dispatch();
    }
    /// Invokes the awaiting strategy once, under a fresh ticket.
    fn dispatch(&mut self) {
        let Phase::Awaiting { color, strategy } = self.phase else {
            return;
        };
        let Some(mailbox) = self.mailbox.upgrade() else {
            return;
        };
        self.ticket += 1;
        self.inflight = true;
        let ticket = self.ticket;
        let board = self.board.clone();
        let exchange = self.exchange.clone();
        let settings = self.settings.clone();
        log::debug!("[session] #{} invoking {} for {}", ticket, strategy, color);
        tokio::spawn(async move {
            let result = strategy.resolve(color, &board, &exchange, &settings).await;
            mailbox.send(Command::Resolved { ticket, result }).ok();
        });
    }
    /// Forwards a locally applied move for acknowledgement, or moves on directly.
    fn sync(&mut self, color: Color, ply: Ply) {
        if !self.settings.forward_local_moves {
            return self.advance();
        }
        let Some(mailbox) = self.mailbox.upgrade() else {
            return self.advance();
        };
        self.ticket += 1;
        self.phase = Phase::Syncing { color };
        let ticket = self.ticket;
        let exchange = self.exchange.clone();
        tokio::spawn(async move {
            let result = exchange.request(ply, color).await;
            mailbox.send(Command::Synced { ticket, result }).ok();
        });
    }
    fn resolved(&mut self, ticket: u64, result: Result<Resolution, ExchangeError>) {
        if ticket != self.ticket {
            log::debug!("[session] dropping stale resolution #{}", ticket);
            return;
        }
        let Phase::Awaiting { color, strategy } = self.phase else {
            log::debug!("[session] dropping resolution #{} in {}", ticket, self.phase);
            return;
        };
        self.inflight = false;
        match result {
            Ok(Resolution::Wait) => {}
            Ok(Resolution::Exhausted) => {
                let outcome = self.board.outcome().unwrap_or(Outcome::Draw);
                self.finish(outcome);
            }
            Ok(Resolution::Local(ply)) => match self.apply(ply.clone(), color, "") {
                Ok(_) => self.sync(color, ply),
                Err(e) => self.stall(color, strategy, e),
            },
            Ok(Resolution::Remote(decision)) => {
                match self.apply(decision.ply.clone(), color, &decision.annotation) {
                    Ok(_) => {
                        self.compare(&decision);
                        self.advance();
                    }
                    Err(e) => self.stall(color, strategy, e),
                }
            }
            Err(e) => self.stall(color, strategy, e.into()),
        }
    }
    fn synced(&mut self, ticket: u64, result: Result<Decision, ExchangeError>) {
        if ticket != self.ticket {
            log::debug!("[session] dropping stale acknowledgement #{}", ticket);
            return;
        }
        let Phase::Syncing { color } = self.phase else {
            log::debug!("[session] dropping acknowledgement #{} in {}", ticket, self.phase);
            return;
        };
        match result {
            Ok(decision) => {
                log::debug!("[session] {} move acknowledged: {}", color, decision);
                self.compare(&decision);
            }
            Err(e) => log::warn!("[session] {} move not acknowledged ({}), proceeding", color, e),
        }
        self.advance();
    }
}

impl Orchestrator {
    /// Validates, applies and records one move.
    fn apply(&mut self, ply: Ply, color: Color, annotation: &str) -> Result<Record, SessionError> {
        self.board.play(&ply)?;
        let record = Record::new(ply, color, self.board.fen(), annotation);
        log::info!("[session] {}", record);
        self.history.append(record.clone());
        self.broadcast(Notice::Moved(record.clone()));
        Ok(record)
    }
    fn stall(&mut self, color: Color, strategy: Strategy, error: SessionError) {
        log::warn!("[session] {} ({}) stalled: {}", color, strategy, error);
        self.broadcast(Notice::Stalled {
            color,
            strategy,
            error,
        });
    }
    fn finish(&mut self, outcome: Outcome) {
        log::info!("[session] game over: {}", outcome);
        self.phase = Phase::Over(outcome);
        self.inflight = false;
        self.broadcast(Notice::Over(outcome));
    }
    /// The backend's board is advisory; disagreement is only reported.
    fn compare(&self, decision: &Decision) {
        if let Some(theirs) = decision.board.as_deref() {
            let ours = self.board.fen();
            if theirs.split_whitespace().next() != ours.split_whitespace().next() {
                log::warn!("[session] backend board {} differs from local {}", theirs, ours);
            }
        }
    }
    fn broadcast(&mut self, notice: Notice) {
        self.watchers.retain(|watcher| watcher.send(notice.clone()).is_ok());
    }
}
