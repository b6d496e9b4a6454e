//! Application layer modules

pub mod actions;
pub mod bootstrap;
pub mod dialog;
pub mod error;
pub mod history;
pub mod navigation;
pub mod session_service;
pub mod store;
