//! HTTP infrastructure for the session endpoints

pub mod endpoints;

pub use endpoints::HttpSessionEndpoints;
