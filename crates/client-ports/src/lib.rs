//! Client port definitions.
//!
//! The application layer depends on these traits; the adapters crate
//! provides the WebSocket/HTTP implementations and the test doubles.

pub mod outbound;

// Re-export at crate root for convenience
pub use outbound::{ConnectionState, NavigatorPort, PushChannelPort, SessionEndpointsPort};
