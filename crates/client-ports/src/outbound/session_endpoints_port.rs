//! Session Endpoints Port - outbound port for the command/chat/settings
//! endpoints and the bootstrap pulls
//!
//! Everything here is fire-and-forget from the caller's point of view:
//! response bodies are ignored (state changes arrive on the push channel),
//! and failures must never block the UI.

use async_trait::async_trait;

use wolfden_protocol::GameSettings;

#[async_trait]
pub trait SessionEndpointsPort: Send + Sync {
    /// Submit an action or dialog-choice command value.
    async fn post_command(&self, command: &str) -> anyhow::Result<()>;

    /// Submit a free-text chat message.
    async fn post_chat(&self, message: &str) -> anyhow::Result<()>;

    /// Submit a settings update (owner only; the server ignores others).
    async fn post_settings(&self, settings: &GameSettings) -> anyhow::Result<()>;

    /// Bootstrap pull. A non-empty response body is an event frame to be
    /// fed through the same decode/apply path as push frames; `None` means
    /// the server will answer over the push channel instead.
    async fn pull(&self, path: &str) -> anyhow::Result<Option<String>>;
}
