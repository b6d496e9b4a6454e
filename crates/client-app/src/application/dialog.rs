//! Dialog controller
//!
//! Hidden → Shown → Hidden. A shown dialog owns interaction focus; choices
//! dispatch commands like plain actions but never hide the dialog locally.
//! Only a server `hide-dialog` fact returns to Hidden. `show` is last-wins
//! and `hide` is idempotent.

use wolfden_protocol::{DialogChoice, DialogSpec};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DialogState {
    #[default]
    Hidden,
    Shown(DialogSpec),
}

impl DialogState {
    pub fn show(&mut self, spec: DialogSpec) {
        *self = DialogState::Shown(spec);
    }

    pub fn hide(&mut self) {
        *self = DialogState::Hidden;
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, DialogState::Shown(_))
    }

    pub fn active(&self) -> Option<&DialogSpec> {
        match self {
            DialogState::Shown(spec) => Some(spec),
            DialogState::Hidden => None,
        }
    }

    /// Look up a choice by position in the active dialog.
    pub fn choice(&self, index: usize) -> Option<&DialogChoice> {
        match self.active()? {
            DialogSpec::ChoosePlayers { choices } => choices.get(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(names: &[&str]) -> DialogSpec {
        DialogSpec::ChoosePlayers {
            choices: names
                .iter()
                .enumerate()
                .map(|(n, name)| DialogChoice {
                    label: name.to_string(),
                    command: format!("pick:{n}"),
                })
                .collect(),
        }
    }

    #[test]
    fn show_then_hide_round_trip() {
        let mut dialog = DialogState::default();
        assert!(!dialog.is_shown());

        dialog.show(spec(&["Alice", "Bob"]));
        assert!(dialog.is_shown());
        assert_eq!(dialog.choice(1).map(|c| c.command.as_str()), Some("pick:1"));

        dialog.hide();
        assert!(!dialog.is_shown());
        assert!(dialog.choice(0).is_none());
    }

    #[test]
    fn double_show_last_wins_double_hide_is_noop() {
        let mut dialog = DialogState::default();
        dialog.show(spec(&["Alice"]));
        dialog.show(spec(&["Bob", "Carol"]));
        assert_eq!(dialog.choice(0).map(|c| c.label.as_str()), Some("Bob"));

        dialog.hide();
        dialog.hide();
        assert_eq!(dialog, DialogState::Hidden);
    }
}
