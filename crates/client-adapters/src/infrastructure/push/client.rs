//! WebSocket client for the push channel
//!
//! The channel is strictly one-way: the server pushes text frames, each
//! carrying one event object; the client never writes. Frames are handed
//! to the registered callback in arrival order, which is the ordering
//! guarantee the state store relies on.

use std::sync::{Arc, Mutex, RwLock};

use anyhow::Result;
use futures_util::StreamExt;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tokio_util::sync::CancellationToken;

use wolfden_client_ports::ConnectionState;

type FrameCallback = Box<dyn Fn(String) + Send + Sync + 'static>;
type StateCallback = Box<dyn Fn(ConnectionState) + Send + Sync + 'static>;

pub struct PushClient {
    url: String,
    state: Arc<RwLock<ConnectionState>>,
    on_frame: Arc<Mutex<Option<FrameCallback>>>,
    on_state_change: Arc<Mutex<Option<StateCallback>>>,
    cancel: CancellationToken,
}

impl PushClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            state: Arc::new(RwLock::new(ConnectionState::Disconnected)),
            on_frame: Arc::new(Mutex::new(None)),
            on_state_change: Arc::new(Mutex::new(None)),
            cancel: CancellationToken::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn state(&self) -> ConnectionState {
        *self.state.read().unwrap_or_else(|p| p.into_inner())
    }

    pub fn set_on_frame<F>(&self, callback: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        let mut on_frame = self.on_frame.lock().unwrap_or_else(|p| p.into_inner());
        *on_frame = Some(Box::new(callback));
    }

    pub fn set_on_state_change<F>(&self, callback: F)
    where
        F: Fn(ConnectionState) + Send + Sync + 'static,
    {
        let mut on_state_change = self
            .on_state_change
            .lock()
            .unwrap_or_else(|p| p.into_inner());
        *on_state_change = Some(Box::new(callback));
    }

    pub(crate) fn set_state(&self, new_state: ConnectionState) {
        {
            let mut state = self.state.write().unwrap_or_else(|p| p.into_inner());
            if *state == new_state {
                return;
            }
            *state = new_state;
        }
        let callback = self
            .on_state_change
            .lock()
            .unwrap_or_else(|p| p.into_inner());
        if let Some(ref cb) = *callback {
            cb(new_state);
        }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
        self.set_state(ConnectionState::Disconnected);
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Dial and pump one connection until it closes, errors, or the client
    /// is cancelled. Ok on a clean end, Err on a dial failure or stream
    /// error; the supervisor decides what happens next either way.
    pub async fn run_once(&self) -> Result<()> {
        self.set_state(ConnectionState::Connecting);

        let (ws_stream, _) = match connect_async(&self.url).await {
            Ok(conn) => conn,
            Err(e) => {
                tracing::error!("failed to connect push channel: {e}");
                self.set_state(ConnectionState::Failed);
                return Err(e.into());
            }
        };
        tracing::info!("push channel connected at {}", self.url);
        self.set_state(ConnectionState::Connected);

        let (_, mut read) = ws_stream.split();
        loop {
            tokio::select! {
                _ = self.cancel.cancelled() => {
                    tracing::info!("push channel cancelled");
                    break;
                }
                msg = read.next() => {
                    match msg {
                        Some(Ok(Message::Text(text))) => self.deliver(text.to_string()),
                        Some(Ok(Message::Close(_))) => {
                            tracing::info!("server closed push channel");
                            break;
                        }
                        Some(Ok(Message::Ping(_))) => {}
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            tracing::error!("push channel error: {e}");
                            self.set_state(ConnectionState::Disconnected);
                            return Err(e.into());
                        }
                        None => break,
                    }
                }
            }
        }

        self.set_state(ConnectionState::Disconnected);
        Ok(())
    }

    fn deliver(&self, text: String) {
        let callback = self.on_frame.lock().unwrap_or_else(|p| p.into_inner());
        if let Some(ref cb) = *callback {
            cb(text);
        }
    }
}
