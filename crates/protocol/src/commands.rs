//! Outbound request bodies
//!
//! The command and chat endpoints take form-encoded bodies; the settings
//! endpoint takes [`crate::GameSettings`] as JSON. Responses are ignored by
//! the client beyond the status code - state changes arrive later on the
//! push channel.

use serde::Serialize;

/// Body for the command endpoint: `command=<value>`.
///
/// Used for both plain action selections and dialog choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandRequest<'a> {
    pub command: &'a str,
}

/// Body for the chat endpoint: `message=<text>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatPost<'a> {
    pub message: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Form encoding happens in the adapters via reqwest; here we only pin
    // the serde field names to the wire keys.
    #[test]
    fn command_request_field_name() {
        let json = match serde_json::to_string(&CommandRequest { command: "start" }) {
            Ok(j) => j,
            Err(e) => panic!("encode failed: {e}"),
        };
        assert_eq!(json, r#"{"command":"start"}"#);
    }

    #[test]
    fn chat_post_field_name() {
        let json = match serde_json::to_string(&ChatPost { message: "hi all" }) {
            Ok(j) => j,
            Err(e) => panic!("encode failed: {e}"),
        };
        assert_eq!(json, r#"{"message":"hi all"}"#);
    }
}
