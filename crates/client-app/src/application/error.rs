//! Service layer error types

use thiserror::Error;

/// Errors surfaced by [`crate::SessionService`] dispatch operations.
///
/// Nothing here is fatal: callers log and carry on, and the store is never
/// left inconsistent by a failed dispatch.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The selected action index does not exist in the current registry
    /// (stale click after an `actions` replacement, or a pending overlay).
    #[error("no action at position {0}")]
    UnknownAction(usize),

    /// A dialog choice was made while no dialog is shown.
    #[error("no dialog is currently shown")]
    NoActiveDialog,

    /// The dialog choice index does not exist in the active dialog.
    #[error("no dialog choice at position {0}")]
    UnknownDialogChoice(usize),

    /// An endpoint submission failed (network or non-2xx). Fire-and-forget
    /// semantics: logged by callers, never retried automatically.
    #[error("endpoint request failed: {0}")]
    Endpoint(anyhow::Error),
}
