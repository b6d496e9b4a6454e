//! Wolfden Protocol - Wire types shared between the game server and the client
//!
//! This crate contains everything the client needs to speak the session
//! protocol:
//! - Typed facts decoded from push-channel frames (`events`)
//! - Domain value types carried by those facts (`types`)
//! - Outbound request bodies for the command/chat/settings endpoints
//!   (`commands`)
//! - Per-screen profiles that parameterize decoding and bootstrap (`screen`)
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json, and thiserror
//! 2. **No business logic** - Pure data types and decoding
//! 3. **Tolerant decoding** - Unknown event keys and unknown dialog kinds
//!    are ignored; positional wire tuples are normalized to named shapes at
//!    this boundary and never leak upward

pub mod commands;
pub mod events;
pub mod screen;
pub mod types;

// =============================================================================
// Event Decoding
// =============================================================================
pub use events::{decode_frame, DecodeError, Fact, FactKind, FACT_KEY_PRIORITY};

// =============================================================================
// Wire Value Types
// =============================================================================
pub use types::{
    ActionDescriptor, CardCount, ChatEntry, DialogChoice, DialogSpec, GameSettings, PhaseInfo,
    PlayerInfo, PlayerRoleRow, PostGameResults, TableRoleRow, VoteRow, ROLE_TAGS,
};

// =============================================================================
// Outbound Request Bodies
// =============================================================================
pub use commands::{ChatPost, CommandRequest};

// =============================================================================
// Screen Profiles
// =============================================================================
pub use screen::{ActionSchema, ScreenKind};
