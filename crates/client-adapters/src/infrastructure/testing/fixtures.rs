//! Shared wire-format fixtures for tests

use std::collections::BTreeMap;

use wolfden_protocol::{GameSettings, ROLE_TAGS};

/// A choose-players dialog frame with two pickable players.
pub const CHOOSE_PLAYERS_FRAME: &str = r#"{
    "show-dialog": {
        "dialog-type": "choose-players",
        "actions": [["Alice", "pick:1"], ["Bob", "pick:2"]]
    }
}"#;

/// Settings with every optional role disabled and the default werewolf
/// count, matching a freshly created session.
pub fn default_settings() -> GameSettings {
    let roles: BTreeMap<String, bool> = ROLE_TAGS
        .iter()
        .map(|tag| (tag.to_string(), false))
        .collect();
    GameSettings {
        roles,
        werewolves: 2,
    }
}
