//! Push channel infrastructure
//!
//! `PushClient` speaks one WebSocket connection; `PushSupervisor` wraps it
//! in a reconnect loop with exponential backoff; `WsPushChannel` exposes
//! the pair behind the `PushChannelPort` trait.

pub mod adapter;
pub mod client;
pub mod supervisor;

pub use adapter::WsPushChannel;
pub use client::PushClient;
pub use supervisor::{PushSupervisor, ReconnectPolicy};
