//! Per-screen protocol profiles
//!
//! The lobby and the in-game screen speak the same event protocol but
//! differ in which fact kinds they care about, how their `actions` tuples
//! are laid out, which pulls hydrate them on connect, and where a
//! `shut-down` sends the user. Collapsing those differences into one
//! profile keeps a single decoder and state store serving every screen.

use crate::events::FactKind;

/// Positional layout of a 3-tuple `actions` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionSchema {
    /// `(label, description, command)` - lobby layout
    LabelDescriptionCommand,
    /// `(description, command, selected_message)` - in-game layout
    DescriptionCommandMessage,
}

/// Which screen of the session this client instance is driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    /// Pre-game lobby: invitations, session formation
    Lobby,
    /// In-game werewolves screen: phases, night actions, voting, results
    Game,
}

impl ScreenKind {
    /// The `actions` tuple layout this screen's server variant sends.
    pub fn action_schema(self) -> ActionSchema {
        match self {
            ScreenKind::Lobby => ActionSchema::LabelDescriptionCommand,
            ScreenKind::Game => ActionSchema::DescriptionCommandMessage,
        }
    }

    /// Capability set: fact kinds this screen registers interest in.
    /// Kinds outside the set are ignored at the decode boundary.
    pub fn accepts(self, kind: FactKind) -> bool {
        match self {
            ScreenKind::Lobby => matches!(
                kind,
                FactKind::Status
                    | FactKind::Actions
                    | FactKind::Output
                    | FactKind::ShowDialog
                    | FactKind::HideDialog
                    | FactKind::Chat
                    | FactKind::InstallApp
                    | FactKind::ShutDown
            ),
            ScreenKind::Game => true,
        }
    }

    /// Ordered pull batch issued on every (re)connect to hydrate state.
    pub fn bootstrap_paths(self) -> &'static [&'static str] {
        match self {
            ScreenKind::Lobby => &["lobby/status", "lobby/actions"],
            ScreenKind::Game => &["werewolves/request-all"],
        }
    }

    /// Sibling resource a `shut-down` fact redirects to.
    pub fn shutdown_resource(self) -> &'static str {
        match self {
            ScreenKind::Lobby => "logout",
            ScreenKind::Game => "expire",
        }
    }
}
