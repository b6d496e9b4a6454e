//! Action registry with optimistic pending overlay
//!
//! `actions` facts are snapshots: each one fully replaces the registry,
//! never merges into it. Selecting an action whose descriptor carries a
//! `selected_message` swaps the whole panel for a local placeholder until
//! the next authoritative `actions` fact overwrites it (or a `phase-info`
//! fact clears it - by then the selection has been consumed server-side
//! and the old list would be stale).

use wolfden_protocol::ActionDescriptor;

/// What the action area of the screen currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionPanel {
    /// The current authoritative action list (possibly empty)
    List(Vec<ActionDescriptor>),
    /// Optimistic local-only placeholder shown after a selection
    Pending(String),
}

impl Default for ActionPanel {
    fn default() -> Self {
        ActionPanel::List(Vec::new())
    }
}

impl ActionPanel {
    /// Replace-whole semantics for an `actions` fact. Also clears any
    /// pending overlay: the server's list is always authoritative.
    pub fn replace(&mut self, actions: Vec<ActionDescriptor>) {
        *self = ActionPanel::List(actions);
    }

    /// Look up a descriptor by its stable key (position in the list).
    pub fn get(&self, index: usize) -> Option<&ActionDescriptor> {
        match self {
            ActionPanel::List(actions) => actions.get(index),
            ActionPanel::Pending(_) => None,
        }
    }

    /// The current list, empty while a pending overlay is shown.
    pub fn descriptors(&self) -> &[ActionDescriptor] {
        match self {
            ActionPanel::List(actions) => actions,
            ActionPanel::Pending(_) => &[],
        }
    }

    /// Swap the panel for the selection placeholder.
    pub fn mark_selected(&mut self, message: String) {
        *self = ActionPanel::Pending(message);
    }

    /// Drop the overlay without new authoritative data (phase rollover).
    pub fn clear_pending(&mut self) {
        if matches!(self, ActionPanel::Pending(_)) {
            *self = ActionPanel::List(Vec::new());
        }
    }

    pub fn pending_message(&self) -> Option<&str> {
        match self {
            ActionPanel::Pending(message) => Some(message),
            ActionPanel::List(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(command: &str) -> ActionDescriptor {
        ActionDescriptor {
            label: command.to_string(),
            description: format!("do {command}"),
            command: command.to_string(),
            selected_message: None,
        }
    }

    #[test]
    fn replace_is_a_snapshot_not_a_merge() {
        let mut panel = ActionPanel::default();
        panel.replace(vec![descriptor("a"), descriptor("b")]);
        panel.replace(vec![descriptor("c")]);
        let commands: Vec<&str> = panel
            .descriptors()
            .iter()
            .map(|d| d.command.as_str())
            .collect();
        assert_eq!(commands, vec!["c"]);
    }

    #[test]
    fn pending_overlay_hides_the_list_until_replaced() {
        let mut panel = ActionPanel::default();
        panel.replace(vec![descriptor("vote")]);
        panel.mark_selected("You voted.".to_string());
        assert_eq!(panel.pending_message(), Some("You voted."));
        assert!(panel.descriptors().is_empty());
        assert!(panel.get(0).is_none());

        panel.replace(vec![descriptor("next")]);
        assert_eq!(panel.pending_message(), None);
        assert_eq!(panel.descriptors().len(), 1);
    }

    #[test]
    fn clear_pending_only_touches_overlays() {
        let mut panel = ActionPanel::default();
        panel.replace(vec![descriptor("keep")]);
        panel.clear_pending();
        assert_eq!(panel.descriptors().len(), 1);

        panel.mark_selected("done".to_string());
        panel.clear_pending();
        assert!(panel.descriptors().is_empty());
        assert_eq!(panel.pending_message(), None);
    }
}
