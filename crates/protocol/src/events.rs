//! Event frame decoding
//!
//! Each push-channel frame carries one JSON object whose top-level keys are
//! event kinds. A single frame may carry several keys at once; decoding
//! emits one [`Fact`] per recognized key, in the fixed priority order of
//! [`FACT_KEY_PRIORITY`], so that applying a whole frame is deterministic
//! (a frame carrying both `show-dialog` and `hide-dialog` applies the show
//! first and ends hidden).
//!
//! Decoding is screen-parameterized: each [`ScreenKind`] registers interest
//! in a subset of fact kinds and fixes the positional layout of `actions`
//! tuples. Keys a screen does not care about, unknown keys, and payloads
//! that fail to decode are all skipped - only a frame that is not a JSON
//! object at all is an error.

use serde_json::Value;
use thiserror::Error;

use crate::screen::{ActionSchema, ScreenKind};
use crate::types::{
    ActionDescriptor, CardCount, ChatEntry, DialogChoice, DialogSpec, GameSettings, PhaseInfo,
    PlayerInfo, PostGameResults,
};

/// One decoded, typed unit of state change.
#[derive(Debug, Clone, PartialEq)]
pub enum Fact {
    /// Free-form session status label
    Status(String),
    /// Full replacement of the action list (snapshot, never a delta)
    Actions(Vec<ActionDescriptor>),
    /// Newline-delimited informational text
    Output(String),
    /// Show a modal dialog, taking exclusive interaction focus
    ShowDialog(DialogSpec),
    /// Dismiss the active dialog, if any
    HideDialog,
    /// One chat line
    Chat(ChatEntry),
    /// Identity of the local player
    PlayerInfo(PlayerInfo),
    /// Full replacement of the cards-in-play table
    GameInfo(Vec<CardCount>),
    /// Full replacement of the current phase banner
    PhaseInfo(PhaseInfo),
    /// Terminal results view
    PostGameResults(PostGameResults),
    /// Redirect to a sibling resource (screen hand-off)
    InstallApp(String),
    /// Session over; redirect to the screen's exit resource
    ShutDown,
    /// Current role/werewolf configuration
    SettingsInfo(GameSettings),
}

/// Discriminant of [`Fact`], used for screen capability sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactKind {
    Status,
    Actions,
    Output,
    ShowDialog,
    HideDialog,
    Chat,
    PlayerInfo,
    GameInfo,
    PhaseInfo,
    PostGameResults,
    InstallApp,
    ShutDown,
    SettingsInfo,
}

impl Fact {
    pub fn kind(&self) -> FactKind {
        match self {
            Fact::Status(_) => FactKind::Status,
            Fact::Actions(_) => FactKind::Actions,
            Fact::Output(_) => FactKind::Output,
            Fact::ShowDialog(_) => FactKind::ShowDialog,
            Fact::HideDialog => FactKind::HideDialog,
            Fact::Chat(_) => FactKind::Chat,
            Fact::PlayerInfo(_) => FactKind::PlayerInfo,
            Fact::GameInfo(_) => FactKind::GameInfo,
            Fact::PhaseInfo(_) => FactKind::PhaseInfo,
            Fact::PostGameResults(_) => FactKind::PostGameResults,
            Fact::InstallApp(_) => FactKind::InstallApp,
            Fact::ShutDown => FactKind::ShutDown,
            Fact::SettingsInfo(_) => FactKind::SettingsInfo,
        }
    }
}

/// Recognized event keys in application order.
///
/// Facts from one frame are always emitted (and therefore applied) in this
/// order, regardless of key order in the JSON text.
pub const FACT_KEY_PRIORITY: [(&str, FactKind); 13] = [
    ("status", FactKind::Status),
    ("actions", FactKind::Actions),
    ("output", FactKind::Output),
    ("show-dialog", FactKind::ShowDialog),
    ("hide-dialog", FactKind::HideDialog),
    ("chat", FactKind::Chat),
    ("player-info", FactKind::PlayerInfo),
    ("game-info", FactKind::GameInfo),
    ("phase-info", FactKind::PhaseInfo),
    ("post-game-results", FactKind::PostGameResults),
    ("install-app", FactKind::InstallApp),
    ("shut-down", FactKind::ShutDown),
    ("settings-info", FactKind::SettingsInfo),
];

/// Frame-level decode failure. Per-key payload problems never surface here;
/// they are skipped for forward compatibility.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("frame is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("frame payload is not a JSON object")]
    NotAnObject,
}

/// Decode one inbound frame into zero or more facts.
///
/// `screen` selects the capability set and the `actions` tuple layout.
pub fn decode_frame(text: &str, screen: ScreenKind) -> Result<Vec<Fact>, DecodeError> {
    let value: Value = serde_json::from_str(text)?;
    let object = value.as_object().ok_or(DecodeError::NotAnObject)?;

    let mut facts = Vec::new();
    for (key, kind) in FACT_KEY_PRIORITY {
        if !screen.accepts(kind) {
            continue;
        }
        let Some(payload) = object.get(key) else {
            continue;
        };
        if let Some(fact) = decode_fact(kind, payload, screen.action_schema()) {
            facts.push(fact);
        }
    }
    Ok(facts)
}

fn decode_fact(kind: FactKind, payload: &Value, schema: ActionSchema) -> Option<Fact> {
    match kind {
        FactKind::Status => payload.as_str().map(|s| Fact::Status(s.to_string())),
        FactKind::Actions => decode_actions(payload, schema).map(Fact::Actions),
        FactKind::Output => payload.as_str().map(|s| Fact::Output(s.to_string())),
        FactKind::ShowDialog => decode_dialog(payload).map(Fact::ShowDialog),
        FactKind::HideDialog => Some(Fact::HideDialog),
        FactKind::Chat => from_value(payload).map(Fact::Chat),
        FactKind::PlayerInfo => from_value(payload).map(Fact::PlayerInfo),
        FactKind::GameInfo => from_value(payload).map(Fact::GameInfo),
        FactKind::PhaseInfo => from_value(payload).map(Fact::PhaseInfo),
        FactKind::PostGameResults => from_value(payload).map(Fact::PostGameResults),
        FactKind::InstallApp => payload.as_str().map(|s| Fact::InstallApp(s.to_string())),
        FactKind::ShutDown => Some(Fact::ShutDown),
        FactKind::SettingsInfo => from_value(payload).map(Fact::SettingsInfo),
    }
}

fn from_value<T: serde::de::DeserializeOwned>(payload: &Value) -> Option<T> {
    serde_json::from_value(payload.clone()).ok()
}

/// Normalize the positional action tuples into [`ActionDescriptor`]s.
///
/// 3-tuples follow the screen's schema; 2-tuples are always
/// `(description, command)`. Entries that do not fit either shape are
/// skipped.
fn decode_actions(payload: &Value, schema: ActionSchema) -> Option<Vec<ActionDescriptor>> {
    let entries = payload.as_array()?;
    let mut actions = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some(fields) = entry.as_array() else {
            continue;
        };
        if let Some(descriptor) = decode_action_entry(fields, schema) {
            actions.push(descriptor);
        }
    }
    Some(actions)
}

fn decode_action_entry(fields: &[Value], schema: ActionSchema) -> Option<ActionDescriptor> {
    match (fields.len(), schema) {
        (2, _) => Some(ActionDescriptor {
            label: text(&fields[0])?,
            description: text(&fields[0])?,
            command: text(&fields[1])?,
            selected_message: None,
        }),
        (3.., ActionSchema::LabelDescriptionCommand) => Some(ActionDescriptor {
            label: text(&fields[0])?,
            description: text(&fields[1])?,
            command: text(&fields[2])?,
            selected_message: None,
        }),
        (3.., ActionSchema::DescriptionCommandMessage) => Some(ActionDescriptor {
            label: text(&fields[0])?,
            description: text(&fields[0])?,
            command: text(&fields[1])?,
            selected_message: optional_text(&fields[2]),
        }),
        _ => None,
    }
}

fn decode_dialog(payload: &Value) -> Option<DialogSpec> {
    let object = payload.as_object()?;
    match object.get("dialog-type")?.as_str()? {
        "choose-players" => {
            let entries = object.get("actions")?.as_array()?;
            let mut choices = Vec::with_capacity(entries.len());
            for entry in entries {
                let Some(fields) = entry.as_array() else {
                    continue;
                };
                // (label, command) with an optional trailing field some
                // servers send; the trailer is display-only and ignored.
                if fields.len() < 2 {
                    continue;
                }
                let (Some(label), Some(command)) = (text(&fields[0]), text(&fields[1])) else {
                    continue;
                };
                choices.push(DialogChoice { label, command });
            }
            Some(DialogSpec::ChoosePlayers { choices })
        }
        // Unknown dialog kinds are ignored, like unknown event keys.
        _ => None,
    }
}

/// Command values arrive as strings on the web screens and as integers from
/// the terminal-era server paths; both normalize to `String`.
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn optional_text(value: &Value) -> Option<String> {
    match text(value) {
        Some(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}
