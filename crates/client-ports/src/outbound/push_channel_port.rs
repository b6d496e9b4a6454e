//! Push Channel Port - outbound port for the server-push event stream
//!
//! Abstracts the long-lived, one-way, text-framed connection the server
//! uses to push session events. The application never sees the transport;
//! it receives raw frame text (decoding happens through the protocol
//! crate) strictly in arrival order.

/// Connection state of the push channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Not connected to the server
    Disconnected,
    /// Attempting to establish a connection
    Connecting,
    /// Successfully connected
    Connected,
    /// Connection lost, attempting to reconnect
    Reconnecting,
    /// Connection failed and gave up
    Failed,
}

/// Port trait for the push channel.
///
/// Intentionally object-safe so the composition root can hand an
/// `Arc<dyn PushChannelPort>` to higher layers without exposing concrete
/// transport types. `start` is non-blocking; the implementation pumps
/// frames on its own task and invokes the registered callbacks.
pub trait PushChannelPort: Send + Sync {
    /// Current connection state
    fn state(&self) -> ConnectionState;

    /// The channel URL this port is configured for
    fn url(&self) -> &str;

    /// Begin connecting (and reconnecting on drops) in the background
    fn start(&self) -> anyhow::Result<()>;

    /// Tear the channel down; no further callbacks fire after this
    fn shutdown(&self);

    /// Register the frame callback. Frames are delivered one at a time,
    /// in server-send order.
    fn set_on_frame(&self, callback: Box<dyn Fn(String) + Send + Sync + 'static>);

    /// Register the state-change callback. Also fires on every
    /// (re)establishment, which is the rehydration trigger.
    fn set_on_state_change(&self, callback: Box<dyn Fn(ConnectionState) + Send + Sync + 'static>);
}
