//! Session state store
//!
//! The single owner of all client-visible session state. Facts are applied
//! with one of two merge policies: replace-whole (actions, game-info,
//! phase-info), append (chat, output - bounded newest-first histories), or
//! field-merge (status, player-info, settings-info). Every application is
//! idempotent per fact value, so replaying frames after a reconnect is
//! safe. The renderer is a pure function of a cloned snapshot; nothing
//! else holds state.

use wolfden_protocol::{CardCount, ChatEntry, Fact, GameSettings, PhaseInfo, PostGameResults};

use super::actions::ActionPanel;
use super::dialog::DialogState;
use super::history::History;
use super::navigation::NavigationDirective;

/// Retention cap for chat and output histories. Oldest entries are evicted
/// first once the cap is reached.
pub const HISTORY_CAP: usize = 200;

/// Identity of the local player, field-merged from `player-info` facts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerIdentity {
    pub user_id: Option<String>,
    /// Dealt role card, if the game has started
    pub role: Option<String>,
}

/// The client's entire view of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    /// Free-form status label, field-merged
    pub status: Option<String>,
    pub player: PlayerIdentity,
    /// Role/werewolf configuration, field-merged
    pub settings: Option<GameSettings>,
    /// Action list or its optimistic pending overlay
    pub actions: ActionPanel,
    pub dialog: DialogState,
    /// Chat lines, newest-first, bounded
    pub chat: History<ChatEntry>,
    /// Informational output blocks, newest-first, bounded
    pub output: History<String>,
    /// Cards-in-play table, replace-whole
    pub game_info: Vec<CardCount>,
    /// Current phase banner, replace-whole
    pub phase: Option<PhaseInfo>,
    /// Terminal results; once set, the action/phase UI is retired
    pub results: Option<PostGameResults>,
}

impl SessionView {
    pub fn new() -> Self {
        Self {
            status: None,
            player: PlayerIdentity::default(),
            settings: None,
            actions: ActionPanel::default(),
            dialog: DialogState::default(),
            chat: History::new(HISTORY_CAP),
            output: History::new(HISTORY_CAP),
            game_info: Vec::new(),
            phase: None,
            results: None,
        }
    }

    /// Apply one fact. Navigation facts carry no state; they surface as a
    /// directive for the caller to execute after the frame's update pass.
    pub fn apply(&mut self, fact: Fact) -> Option<NavigationDirective> {
        match fact {
            Fact::Status(status) => {
                self.status = Some(status);
            }
            Fact::Actions(actions) => {
                self.actions.replace(actions);
            }
            Fact::Output(text) => {
                self.output.push(text);
            }
            Fact::ShowDialog(spec) => {
                self.dialog.show(spec);
            }
            Fact::HideDialog => {
                self.dialog.hide();
            }
            Fact::Chat(entry) => {
                self.chat.push(entry);
            }
            Fact::PlayerInfo(info) => {
                self.player.user_id = Some(info.user_id);
                self.player.role = Some(info.role);
            }
            Fact::GameInfo(rows) => {
                self.game_info = rows;
            }
            Fact::PhaseInfo(phase) => {
                self.phase = Some(phase);
                // Phase rollover consumes any optimistic selection overlay.
                self.actions.clear_pending();
            }
            Fact::PostGameResults(results) => {
                self.results = Some(results);
            }
            Fact::SettingsInfo(settings) => match &mut self.settings {
                Some(current) => {
                    current.roles = settings.roles;
                    current.werewolves = settings.werewolves;
                }
                None => self.settings = Some(settings),
            },
            Fact::InstallApp(resource) => {
                return Some(NavigationDirective::InstallApp(resource));
            }
            Fact::ShutDown => {
                return Some(NavigationDirective::ShutDown);
            }
        }
        None
    }

    /// True once post-game results arrived: the ordinary action/phase UI is
    /// retired in favor of the results view.
    pub fn phase_ui_retired(&self) -> bool {
        self.results.is_some()
    }
}

impl Default for SessionView {
    fn default() -> Self {
        Self::new()
    }
}
