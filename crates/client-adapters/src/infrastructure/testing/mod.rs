//! Test doubles for the outbound ports, plus shared frame fixtures.
//!
//! Compiled into the regular build so downstream crates can use them in
//! their own tests without a feature dance; nothing here is reachable
//! from production wiring.

pub mod fixtures;
pub mod mock_endpoints;
pub mod mock_navigator;

pub use mock_endpoints::MockSessionEndpoints;
pub use mock_navigator::MockNavigator;
