//! Wolfden Client Adapters - infrastructure implementations of the client
//! ports: the WebSocket push channel (with reconnect supervision), the
//! HTTP session endpoints, and test doubles for both.

pub mod infrastructure;
