//! Value types carried by decoded facts
//!
//! These are the canonical named shapes. Several of them travel the wire as
//! positional arrays; those are normalized here via `#[serde(from = ...)]`
//! conversions so the rest of the client never sees tuple indices.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Role tags the settings screen exposes, in display order.
///
/// The werewolf count is carried separately in [`GameSettings`].
pub const ROLE_TAGS: [&str; 7] = [
    "seer",
    "robber",
    "troublemaker",
    "minion",
    "insomniac",
    "hunter",
    "tanner",
];

/// Canonical action descriptor.
///
/// The wire format is a positional 2- or 3-tuple whose layout varies by
/// screen (see [`crate::screen::ActionSchema`]); the decoder normalizes both
/// layouts into this shape. The stable key for an action is its position in
/// the received list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDescriptor {
    /// Short label (falls back to `description` on screens that omit it)
    pub label: String,
    /// Human-readable description shown in the action list
    pub description: String,
    /// Opaque command value submitted to the command endpoint on selection
    pub command: String,
    /// Optimistic placeholder text shown after selection, if any
    pub selected_message: Option<String>,
}

/// One selectable entry in a modal dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogChoice {
    pub label: String,
    pub command: String,
}

/// Modal dialog specification, tagged by `dialog-type` on the wire.
///
/// Open variant: new dialog kinds can be added here without touching call
/// sites that only care about other kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogSpec {
    /// Pick one player from an ordered list (invitations, night actions)
    ChoosePlayers { choices: Vec<DialogChoice> },
}

/// One chat line. Histories render newest-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub sender: String,
    pub message: String,
}

/// Identity facts about the local player.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayerInfo {
    pub user_id: String,
    /// The role card dealt to this player at game start
    #[serde(rename = "card_name")]
    pub role: String,
}

/// One row of the cards-in-play table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, u32)")]
pub struct CardCount {
    pub card: String,
    pub count: u32,
}

impl From<(String, u32)> for CardCount {
    fn from((card, count): (String, u32)) -> Self {
        Self { card, count }
    }
}

/// Current game phase, wire format `[title, description]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, String)")]
pub struct PhaseInfo {
    pub title: String,
    pub description: String,
}

impl From<(String, String)> for PhaseInfo {
    fn from((title, description): (String, String)) -> Self {
        Self { title, description }
    }
}

/// Voting outcome row: who each player voted for and whether they were
/// eliminated. Wire format `[player, eliminated, voted_for]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, bool, String)")]
pub struct VoteRow {
    pub player: String,
    pub eliminated: bool,
    pub voted_for: String,
}

impl From<(String, bool, String)> for VoteRow {
    fn from((player, eliminated, voted_for): (String, bool, String)) -> Self {
        Self {
            player,
            eliminated,
            voted_for,
        }
    }
}

/// Dealt-versus-final role row for a player.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, String, String)")]
pub struct PlayerRoleRow {
    pub player: String,
    pub dealt_role: String,
    pub final_role: String,
}

impl From<(String, String, String)> for PlayerRoleRow {
    fn from((player, dealt_role, final_role): (String, String, String)) -> Self {
        Self {
            player,
            dealt_role,
            final_role,
        }
    }
}

/// Dealt-versus-final role row for the undealt table cards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, String)")]
pub struct TableRoleRow {
    pub dealt_role: String,
    pub final_role: String,
}

impl From<(String, String)> for TableRoleRow {
    fn from((dealt_role, final_role): (String, String)) -> Self {
        Self {
            dealt_role,
            final_role,
        }
    }
}

/// Terminal post-game results. Once received, the action/phase UI is
/// retired in favor of this view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostGameResults {
    #[serde(rename = "winner-text")]
    pub winner_text: String,
    #[serde(rename = "voting-table")]
    pub voting_table: Vec<VoteRow>,
    #[serde(rename = "player-role-table")]
    pub player_role_table: Vec<PlayerRoleRow>,
    #[serde(rename = "table-roles")]
    pub table_roles: Vec<TableRoleRow>,
}

/// Session settings: which optional roles are in play plus the werewolf
/// count. The same shape arrives in `settings-info` facts and is posted
/// back to the settings endpoint as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub roles: BTreeMap<String, bool>,
    pub werewolves: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_game_results_decode_from_wire_shape() {
        let json = r#"{
            "winner-text": "Villagers win!",
            "voting-table": [["alice", true, "bob"], ["bob", false, "alice"]],
            "player-role-table": [["alice", "seer", "werewolf"]],
            "table-roles": [["tanner", "seer"]]
        }"#;
        let results: PostGameResults = match serde_json::from_str(json) {
            Ok(r) => r,
            Err(e) => panic!("decode failed: {e}"),
        };
        assert_eq!(results.winner_text, "Villagers win!");
        assert_eq!(results.voting_table.len(), 2);
        assert!(results.voting_table[0].eliminated);
        assert_eq!(results.voting_table[0].voted_for, "bob");
        assert_eq!(results.player_role_table[0].final_role, "werewolf");
        assert_eq!(results.table_roles[0].dealt_role, "tanner");
    }

    #[test]
    fn game_settings_round_trip() {
        let mut roles = BTreeMap::new();
        for tag in ROLE_TAGS {
            roles.insert(tag.to_string(), tag == "seer");
        }
        let settings = GameSettings {
            roles,
            werewolves: 2,
        };
        let json = match serde_json::to_string(&settings) {
            Ok(j) => j,
            Err(e) => panic!("encode failed: {e}"),
        };
        let back: GameSettings = match serde_json::from_str(&json) {
            Ok(s) => s,
            Err(e) => panic!("decode failed: {e}"),
        };
        assert_eq!(back, settings);
    }

    #[test]
    fn player_info_uses_card_name_key() {
        let info: PlayerInfo =
            match serde_json::from_str(r#"{"user_id": "alice", "card_name": "robber"}"#) {
                Ok(i) => i,
                Err(e) => panic!("decode failed: {e}"),
            };
        assert_eq!(info.user_id, "alice");
        assert_eq!(info.role, "robber");
    }
}
