use super::*;
use crate::rules::*;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::oneshot;

/// The one request allowed in flight.
#[derive(Debug)]
struct Pending {
    ticket: u64,
    ply: Ply,
    color: Color,
    resolve: oneshot::Sender<Decision>,
}

/// Correlation state shared with the listener.
/// `owed` counts answers to timed-out requests the backend has yet to send;
/// each one is swallowed before it can reach a newer request.
#[derive(Debug, Default)]
struct Slot {
    pending: Option<Pending>,
    owed: usize,
}

/// Single-flight move exchange over a [`Link`].
///
/// - `request` sends a `moveRequest` and suspends until the next `moveDecided` arrives
/// - a second `request` while one is pending fails with `AlreadyPending`
/// - inbound frames with nothing pending, or of unknown kind, are counted and dropped
/// - the first answers after a timeout belong to the timed-out requests and are dropped too
///
/// A listener task owns the inbound half of the link and only ever touches the pending slot.
#[derive(Debug)]
pub struct Exchange {
    outbox: UnboundedSender<String>,
    open: Arc<AtomicBool>,
    slot: Arc<Mutex<Slot>>,
    discarded: Arc<AtomicUsize>,
    tickets: AtomicU64,
    timeout: Option<Duration>,
}

impl Exchange {
    /// Takes ownership of the link and starts listening. Must be called inside a runtime.
    pub fn new(link: Link, timeout: Option<Duration>) -> Self {
        let (outbox, inbox, open) = link.into_parts();
        let slot = Arc::new(Mutex::new(Slot::default()));
        let discarded = Arc::new(AtomicUsize::new(0));
        tokio::spawn(Self::listen(
            inbox,
            slot.clone(),
            open.clone(),
            discarded.clone(),
        ));
        Self {
            outbox,
            open,
            slot,
            discarded,
            tickets: AtomicU64::new(0),
            timeout,
        }
    }
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst) && !self.outbox.is_closed()
    }
    pub async fn is_pending(&self) -> bool {
        self.slot.lock().await.pending.is_some()
    }
    /// Inbound messages dropped so far for lack of a pending request or an unknown kind.
    pub fn discarded(&self) -> usize {
        self.discarded.load(Ordering::SeqCst)
    }
    /// Fire-and-forget send that expects no answer and leaves the pending slot alone.
    pub fn announce(&self, msg: &ClientMessage) -> Result<(), ExchangeError> {
        self.transmit(msg).inspect(|_| match msg {
            ClientMessage::Start { player_config, .. } => log::debug!(
                "[exchange] announced start ({} vs {})",
                player_config.white_strategy,
                player_config.black_strategy
            ),
            ClientMessage::MoveRequest { ply, mover_color } => {
                log::debug!("[exchange] announced {} for {}", ply, mover_color)
            }
        })
    }
    /// Sends a move request and waits for its correlated answer.
    /// An empty `ply` asks the remote side to choose.
    pub async fn request(&self, ply: Ply, color: Color) -> Result<Decision, ExchangeError> {
        let ticket = self.tickets.fetch_add(1, Ordering::SeqCst);
        let (tx, mut rx) = oneshot::channel();
        {
            let mut slot = self.slot.lock().await;
            if let Some(pending) = slot.pending.as_ref() {
                log::warn!(
                    "[exchange] refusing {} for {}: {} for {} still pending",
                    ply,
                    color,
                    pending.ply,
                    pending.color
                );
                return Err(ExchangeError::AlreadyPending);
            }
            self.transmit(&ClientMessage::request(ply.clone(), color))?;
            log::debug!("[exchange] #{} requested {} for {}", ticket, ply, color);
            slot.pending = Some(Pending {
                ticket,
                ply,
                color,
                resolve: tx,
            });
        }
        // a closed receiver means the listener cleared the slot on hangup
        match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, &mut rx).await {
                Ok(answer) => answer.map_err(|_| ExchangeError::LostResponse),
                Err(_) => self.expire(ticket, limit, rx).await,
            },
            None => rx.await.map_err(|_| ExchangeError::LostResponse),
        }
    }
}

impl Exchange {
    fn transmit(&self, msg: &ClientMessage) -> Result<(), ExchangeError> {
        if !self.is_open() {
            log::warn!("[exchange] connection not open, cannot send");
            return Err(ExchangeError::ChannelNotReady);
        }
        self.outbox
            .send(Protocol::encode(msg))
            .map_err(|_| ExchangeError::ChannelNotReady)
    }
    /// Gives up on `ticket` unless the listener already answered it.
    /// An abandoned request leaves one answer owed.
    async fn expire(
        &self,
        ticket: u64,
        limit: Duration,
        mut rx: oneshot::Receiver<Decision>,
    ) -> Result<Decision, ExchangeError> {
        let mut slot = self.slot.lock().await;
        match slot.pending.as_ref().is_some_and(|p| p.ticket == ticket) {
            true => {
                slot.pending.take();
                slot.owed += 1;
                log::warn!("[exchange] #{} timed out after {:?}", ticket, limit);
                Err(ExchangeError::LostResponse)
            }
            false => rx.try_recv().map_err(|_| ExchangeError::LostResponse),
        }
    }
    async fn listen(
        mut inbox: UnboundedReceiver<String>,
        slot: Arc<Mutex<Slot>>,
        open: Arc<AtomicBool>,
        discarded: Arc<AtomicUsize>,
    ) {
        while let Some(text) = inbox.recv().await {
            match Protocol::decode(&text) {
                Ok(ServerMessage::MoveDecided {
                    ply,
                    annotation,
                    board_state,
                }) => {
                    let decision = Decision {
                        ply,
                        annotation,
                        board: board_state,
                    };
                    if !Self::deliver(&mut *slot.lock().await, decision) {
                        discarded.fetch_add(1, Ordering::SeqCst);
                    }
                }
                Err(e) => {
                    discarded.fetch_add(1, Ordering::SeqCst);
                    log::warn!("[exchange] {}", e);
                }
            }
        }
        open.store(false, Ordering::SeqCst);
        slot.lock().await.pending.take();
        log::info!("[exchange] connection closed");
    }
    /// Hands an answer to the pending request. False when it had to be thrown away.
    fn deliver(slot: &mut Slot, decision: Decision) -> bool {
        if slot.owed > 0 {
            slot.owed -= 1;
            log::warn!("[exchange] dropping late answer {} to an expired request", decision.ply);
            return false;
        }
        match slot.pending.take() {
            Some(pending) => {
                if !pending.ply.is_empty() && pending.ply.plain() != decision.ply.plain() {
                    log::warn!(
                        "[exchange] #{} asked about {} but backend answered {}",
                        pending.ticket,
                        pending.ply,
                        decision.ply
                    );
                }
                log::debug!("[exchange] #{} resolved with {}", pending.ticket, decision.ply);
                if let Err(decision) = pending.resolve.send(decision) {
                    log::warn!("[exchange] #{} requester went away, lost {}", pending.ticket, decision);
                    return false;
                }
                true
            }
            None => {
                log::warn!(
                    "[exchange] {}",
                    ExchangeError::UnexpectedMessage(format!("{} with no pending request", decision.ply))
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn answer(server: &mut Link, ply: Ply, annotation: &str) -> ClientMessage {
        let text = server.recv().await.expect("request");
        let msg = Protocol::decode_client(&text).expect("client message");
        server
            .send(Protocol::encode(&ServerMessage::decided(ply, annotation, None)))
            .unwrap();
        msg
    }

    #[tokio::test]
    async fn request_resolves_with_answer() {
        let (client, mut server) = Link::pair();
        let exchange = Exchange::new(client, None);
        let backend = tokio::spawn(async move {
            answer(&mut server, Ply::new("e7", "e5"), "symmetry").await
        });
        let decision = exchange.request(Ply::empty(), Color::Black).await.unwrap();
        assert_eq!(decision, Decision::new(Ply::new("e7", "e5"), "symmetry"));
        assert_eq!(
            backend.await.unwrap(),
            ClientMessage::request(Ply::empty(), Color::Black)
        );
        assert!(!exchange.is_pending().await);
    }

    #[tokio::test]
    async fn overlapping_request_is_refused() {
        let (client, mut server) = Link::pair();
        let exchange = Arc::new(Exchange::new(client, None));
        let first = {
            let exchange = exchange.clone();
            tokio::spawn(async move { exchange.request(Ply::empty(), Color::White).await })
        };
        let seen = server.recv().await.expect("first request");
        assert!(exchange.is_pending().await);
        assert_eq!(
            exchange.request(Ply::new("d2", "d4"), Color::White).await,
            Err(ExchangeError::AlreadyPending)
        );
        server
            .send(Protocol::encode(&ServerMessage::decided(Ply::new("e2", "e4"), "", None)))
            .unwrap();
        assert_eq!(first.await.unwrap().unwrap().ply, Ply::new("e2", "e4"));
        assert!(Protocol::decode_client(&seen).is_ok());
        // the refused request never reached the wire
        assert!(
            tokio::time::timeout(Duration::from_millis(20), server.recv())
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn closed_connection_is_not_ready() {
        let (client, server) = Link::pair();
        let exchange = Exchange::new(client, None);
        drop(server);
        assert_eq!(
            exchange.request(Ply::empty(), Color::White).await,
            Err(ExchangeError::ChannelNotReady)
        );
        assert!(!exchange.is_pending().await);
    }

    #[tokio::test]
    async fn silent_backend_loses_response() {
        let (client, mut server) = Link::pair();
        let exchange = Exchange::new(client, Some(Duration::from_millis(50)));
        assert_eq!(
            exchange.request(Ply::empty(), Color::White).await,
            Err(ExchangeError::LostResponse)
        );
        assert!(!exchange.is_pending().await);
        // the late answer has nothing to resolve
        assert!(server.recv().await.is_some());
        server
            .send(Protocol::encode(&ServerMessage::decided(Ply::new("e2", "e4"), "", None)))
            .unwrap();
        while exchange.discarded() == 0 {
            tokio::task::yield_now().await;
        }
        assert_eq!(exchange.discarded(), 1);
    }

    #[tokio::test]
    async fn late_answer_does_not_resolve_next_request() {
        let (client, mut server) = Link::pair();
        let exchange = Arc::new(Exchange::new(client, Some(Duration::from_millis(50))));
        assert_eq!(
            exchange.request(Ply::new("e2", "e4"), Color::White).await,
            Err(ExchangeError::LostResponse)
        );
        let next = {
            let exchange = exchange.clone();
            tokio::spawn(async move { exchange.request(Ply::empty(), Color::Black).await })
        };
        server.recv().await.expect("acknowledgement request");
        server.recv().await.expect("decision request");
        server
            .send(Protocol::encode(&ServerMessage::decided(Ply::new("e2", "e4"), "", None)))
            .unwrap();
        server
            .send(Protocol::encode(&ServerMessage::decided(Ply::new("e7", "e5"), "reply", None)))
            .unwrap();
        assert_eq!(
            next.await.unwrap(),
            Ok(Decision::new(Ply::new("e7", "e5"), "reply"))
        );
        assert_eq!(exchange.discarded(), 1);
    }

    #[tokio::test]
    async fn answer_racing_the_timeout_is_never_lost() {
        for _ in 0..20 {
            let (client, mut server) = Link::pair();
            let exchange = Exchange::new(client, Some(Duration::from_millis(20)));
            tokio::spawn(async move {
                server.recv().await;
                tokio::time::sleep(Duration::from_millis(20)).await;
                server
                    .send(Protocol::encode(&ServerMessage::decided(Ply::new("e2", "e4"), "", None)))
                    .ok();
                // keep the link up until the answer is accounted for
                tokio::time::sleep(Duration::from_millis(200)).await;
            });
            match exchange.request(Ply::empty(), Color::White).await {
                Ok(decision) => {
                    assert_eq!(decision.ply, Ply::new("e2", "e4"));
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    assert_eq!(exchange.discarded(), 0);
                }
                Err(e) => {
                    assert_eq!(e, ExchangeError::LostResponse);
                    tokio::time::timeout(Duration::from_secs(1), async {
                        while exchange.discarded() == 0 {
                            tokio::time::sleep(Duration::from_millis(5)).await;
                        }
                    })
                    .await
                    .expect("late answer was counted");
                    assert_eq!(exchange.discarded(), 1);
                }
            }
        }
    }

    #[tokio::test]
    async fn hangup_mid_request_loses_response() {
        let (client, mut server) = Link::pair();
        let exchange = Exchange::new(client, None);
        let backend = tokio::spawn(async move {
            server.recv().await;
            drop(server);
        });
        assert_eq!(
            exchange.request(Ply::empty(), Color::White).await,
            Err(ExchangeError::LostResponse)
        );
        backend.await.unwrap();
        assert!(!exchange.is_open());
    }

    #[tokio::test]
    async fn stray_and_unknown_messages_are_discarded() {
        let (client, server) = Link::pair();
        let exchange = Exchange::new(client, None);
        server
            .send(Protocol::encode(&ServerMessage::decided(Ply::new("e2", "e4"), "", None)))
            .unwrap();
        server.send(r#"{"kind":"chat","text":"hello"}"#.to_string()).unwrap();
        while exchange.discarded() < 2 {
            tokio::task::yield_now().await;
        }
        assert!(!exchange.is_pending().await);
        assert!(exchange.is_open());
    }

    #[tokio::test]
    async fn announce_does_not_occupy_slot() {
        let (client, mut server) = Link::pair();
        let exchange = Exchange::new(client, None);
        let msg = ClientMessage::request(Ply::new("e2", "e4"), Color::White);
        exchange.announce(&msg).unwrap();
        assert!(!exchange.is_pending().await);
        assert_eq!(Protocol::decode_client(&server.recv().await.unwrap()), Ok(msg));
    }
}
