//! In-memory mock of the navigator

use std::sync::Mutex;

use wolfden_client_ports::NavigatorPort;

/// Starts at a fixed path and records every replace-redirect.
pub struct MockNavigator {
    initial: String,
    replacements: Mutex<Vec<String>>,
}

impl MockNavigator {
    pub fn new(path: &str) -> Self {
        Self {
            initial: path.to_string(),
            replacements: Mutex::new(Vec::new()),
        }
    }

    pub fn replacements(&self) -> Vec<String> {
        self.replacements.lock().unwrap().clone()
    }
}

impl NavigatorPort for MockNavigator {
    fn current_path(&self) -> String {
        self.replacements
            .lock()
            .unwrap()
            .last()
            .cloned()
            .unwrap_or_else(|| self.initial.clone())
    }

    fn replace(&self, path: &str) {
        self.replacements.lock().unwrap().push(path.to_string());
    }
}
