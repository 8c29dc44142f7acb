use super::*;
use futures::SinkExt;
use futures::StreamExt;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;
use tokio_tungstenite::MaybeTlsStream;
use tokio_tungstenite::WebSocketStream;
use tokio_tungstenite::tungstenite::Message;

type Socket = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

/// Bidirectional text-message pipe.
///
/// The session only ever sees channel endpoints; whether frames travel over a
/// websocket or stay in-process is decided when the link is made.
#[derive(Debug)]
pub struct Link {
    tx: UnboundedSender<String>,
    rx: UnboundedReceiver<String>,
    open: Arc<AtomicBool>,
}

impl Link {
    /// Two connected in-memory ends, both open.
    pub fn pair() -> (Self, Self) {
        let (tx_a, rx_b) = unbounded_channel();
        let (tx_b, rx_a) = unbounded_channel();
        let a = Self {
            tx: tx_a,
            rx: rx_a,
            open: Arc::new(AtomicBool::new(true)),
        };
        let b = Self {
            tx: tx_b,
            rx: rx_b,
            open: Arc::new(AtomicBool::new(true)),
        };
        (a, b)
    }
    /// Connects to a websocket endpoint and bridges it. Returns once the handshake is done.
    pub async fn connect(url: &str) -> anyhow::Result<Self> {
        let (socket, _) = tokio_tungstenite::connect_async(url)
            .await
            .inspect_err(|e| log::error!("[link] failed to connect to {}: {}", url, e))?;
        log::info!("[link] connected to {}", url);
        let (link, outbound, inbound) = Self::detached();
        link.open.store(true, Ordering::SeqCst);
        tokio::spawn(Self::pump(socket, outbound, inbound, link.open.clone()));
        Ok(link)
    }
    /// Starts connecting in the background and returns immediately.
    /// Until the handshake completes the link reports closed and sends are refused.
    pub fn dial(url: &str) -> Self {
        let (link, outbound, inbound) = Self::detached();
        let open = link.open.clone();
        let url = url.to_string();
        tokio::spawn(async move {
            match tokio_tungstenite::connect_async(url.as_str()).await {
                Ok((socket, _)) => {
                    log::info!("[link] connected to {}", url);
                    Self::pump(socket, outbound, inbound, open).await
                }
                Err(e) => log::error!("[link] failed to connect to {}: {}", url, e),
            }
        });
        link
    }
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst) && !self.tx.is_closed()
    }
    pub fn send(&self, text: String) -> Result<(), ExchangeError> {
        if !self.is_open() {
            return Err(ExchangeError::ChannelNotReady);
        }
        self.tx
            .send(text)
            .map_err(|_| ExchangeError::ChannelNotReady)
    }
    pub async fn recv(&mut self) -> Option<String> {
        self.rx.recv().await
    }
    pub(crate) fn into_parts(self) -> (UnboundedSender<String>, UnboundedReceiver<String>, Arc<AtomicBool>) {
        (self.tx, self.rx, self.open)
    }
}

impl Link {
    /// Link whose far ends are handed to a transport task. Starts closed.
    fn detached() -> (Self, UnboundedReceiver<String>, UnboundedSender<String>) {
        let (tx_out, rx_out) = unbounded_channel();
        let (tx_in, rx_in) = unbounded_channel();
        let link = Self {
            tx: tx_out,
            rx: rx_in,
            open: Arc::new(AtomicBool::new(false)),
        };
        (link, rx_out, tx_in)
    }
    /// Shuttles frames between the websocket and the link channels until either side closes.
    async fn pump(
        socket: Socket,
        mut outbound: UnboundedReceiver<String>,
        inbound: UnboundedSender<String>,
        open: Arc<AtomicBool>,
    ) {
        let (mut sink, mut stream) = socket.split();
        open.store(true, Ordering::SeqCst);
        'sesh: loop {
            tokio::select! {
                biased;
                msg = outbound.recv() => match msg {
                    Some(text) => if sink.send(Message::text(text)).await.is_err() { break 'sesh },
                    None => break 'sesh,
                },
                msg = stream.next() => match msg {
                    Some(Ok(Message::Text(text))) => if inbound.send(text.as_str().to_owned()).is_err() { break 'sesh },
                    Some(Ok(Message::Close(_))) => break 'sesh,
                    Some(Err(e)) => {
                        log::warn!("[link] websocket error: {}", e);
                        break 'sesh
                    }
                    None => break 'sesh,
                    _ => continue 'sesh,
                },
            }
        }
        open.store(false, Ordering::SeqCst);
        sink.close()
            .await
            .inspect_err(|e| log::debug!("[link] close: {}", e))
            .ok();
        log::info!("[link] websocket closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[tokio::test]
    async fn pair_carries_text_both_ways() {
        let (mut a, mut b) = Link::pair();
        a.send("ping".to_string()).unwrap();
        assert_eq!(b.recv().await.as_deref(), Some("ping"));
        b.send("pong".to_string()).unwrap();
        assert_eq!(a.recv().await.as_deref(), Some("pong"));
    }
    #[tokio::test]
    async fn send_fails_once_peer_is_gone() {
        let (a, b) = Link::pair();
        drop(b);
        assert_eq!(a.send("hello".to_string()), Err(ExchangeError::ChannelNotReady));
    }
    #[tokio::test]
    async fn dialing_link_is_not_ready() {
        let link = Link::dial("ws://127.0.0.1:9/unreachable");
        assert!(!link.is_open());
        assert_eq!(link.send("hello".to_string()), Err(ExchangeError::ChannelNotReady));
    }
}
