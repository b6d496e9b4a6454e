//! In-memory mock of the session endpoints

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use wolfden_client_ports::SessionEndpointsPort;
use wolfden_protocol::GameSettings;

/// Records every submission and serves canned pull responses.
#[derive(Default)]
pub struct MockSessionEndpoints {
    commands: Mutex<Vec<String>>,
    chats: Mutex<Vec<String>>,
    settings: Mutex<Vec<GameSettings>>,
    pulls: Mutex<Vec<String>>,
    pull_responses: Mutex<HashMap<String, String>>,
    fail_next: AtomicBool,
}

impl MockSessionEndpoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next endpoint call fail with a generic error.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Set the body returned for a pull of `path`. Paths without a canned
    /// response pull as `None`.
    pub fn set_pull_response(&self, path: &str, body: &str) {
        self.pull_responses
            .lock()
            .unwrap()
            .insert(path.to_string(), body.to_string());
    }

    pub fn sent_commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }

    pub fn sent_chats(&self) -> Vec<String> {
        self.chats.lock().unwrap().clone()
    }

    pub fn sent_settings(&self) -> Vec<GameSettings> {
        self.settings.lock().unwrap().clone()
    }

    pub fn pulled_paths(&self) -> Vec<String> {
        self.pulls.lock().unwrap().clone()
    }

    fn check_failure(&self) -> Result<()> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            Err(anyhow!("injected endpoint failure"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SessionEndpointsPort for MockSessionEndpoints {
    async fn post_command(&self, command: &str) -> Result<()> {
        self.check_failure()?;
        self.commands.lock().unwrap().push(command.to_string());
        Ok(())
    }

    async fn post_chat(&self, message: &str) -> Result<()> {
        self.check_failure()?;
        self.chats.lock().unwrap().push(message.to_string());
        Ok(())
    }

    async fn post_settings(&self, settings: &GameSettings) -> Result<()> {
        self.check_failure()?;
        self.settings.lock().unwrap().push(settings.clone());
        Ok(())
    }

    async fn pull(&self, path: &str) -> Result<Option<String>> {
        self.check_failure()?;
        self.pulls.lock().unwrap().push(path.to_string());
        Ok(self.pull_responses.lock().unwrap().get(path).cloned())
    }
}
