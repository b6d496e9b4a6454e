//! Outbound ports - interfaces the application drives

pub mod navigator_port;
pub mod push_channel_port;
pub mod session_endpoints_port;

pub use navigator_port::NavigatorPort;
pub use push_channel_port::{ConnectionState, PushChannelPort};
pub use session_endpoints_port::SessionEndpointsPort;
