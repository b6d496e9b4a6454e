//! Wolfden Client App - application layer
//!
//! Pure session logic, headless-testable: the state store and its merge
//! policies, the action registry with its optimistic pending overlay, the
//! dialog state machine, navigation target computation, the bootstrap
//! sequencer, and the `SessionService` that ties them to the ports.

pub mod application;

pub use application::session_service::SessionService;
pub use application::store::SessionView;
