//! Infrastructure layer - external adapters

pub mod http;
pub mod push;

// Test-only infrastructure fakes (ports/adapters).
// Available for integration testing from other crates as well
pub mod testing;

pub use http::HttpSessionEndpoints;
pub use push::{PushClient, PushSupervisor, ReconnectPolicy, WsPushChannel};
