//! Session service - the single-writer orchestrator
//!
//! Owns the state store behind one mutex: every frame is decoded outside
//! the lock, applied as one atomic update pass inside it, and only then do
//! change listeners see a cloned snapshot. Reads never observe a
//! partially-applied frame. Dispatch methods (action select, dialog
//! choice, chat, settings) are fire-and-forget against the endpoints
//! port - the authoritative state change always arrives later on the push
//! channel.

use std::sync::{Arc, Mutex};

use wolfden_client_ports::{NavigatorPort, SessionEndpointsPort};
use wolfden_protocol::{decode_frame, GameSettings, ScreenKind};

use super::bootstrap;
use super::error::ServiceError;
use super::navigation::{resolve_target, NavigationDirective};
use super::store::SessionView;

type ChangeListener = Box<dyn Fn(&SessionView) + Send + Sync + 'static>;

pub struct SessionService {
    screen: ScreenKind,
    view: Mutex<SessionView>,
    endpoints: Arc<dyn SessionEndpointsPort>,
    navigator: Arc<dyn NavigatorPort>,
    listeners: Mutex<Vec<ChangeListener>>,
}

impl SessionService {
    pub fn new(
        screen: ScreenKind,
        endpoints: Arc<dyn SessionEndpointsPort>,
        navigator: Arc<dyn NavigatorPort>,
    ) -> Self {
        Self {
            screen,
            view: Mutex::new(SessionView::new()),
            endpoints,
            navigator,
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn screen(&self) -> ScreenKind {
        self.screen
    }

    /// Register a change listener, called with a snapshot after every
    /// atomic update pass.
    pub fn subscribe(&self, listener: impl Fn(&SessionView) + Send + Sync + 'static) {
        self.listeners
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(Box::new(listener));
    }

    /// Cloned snapshot of the current view. The renderer is a pure
    /// function of this value.
    pub fn snapshot(&self) -> SessionView {
        self.view.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    /// Ingest one push-channel frame (or a bootstrap pull body).
    ///
    /// Malformed frames are logged and dropped; stream processing
    /// continues. All facts in a frame apply atomically before any
    /// listener runs, and a navigation directive (the last one in the
    /// frame, if several) executes after the update pass.
    pub fn ingest_frame(&self, text: &str) {
        let facts = match decode_frame(text, self.screen) {
            Ok(facts) => facts,
            Err(e) => {
                tracing::warn!("dropping malformed push frame: {e}");
                return;
            }
        };
        if facts.is_empty() {
            return;
        }

        let (snapshot, directive) = {
            let mut view = self.view.lock().unwrap_or_else(|p| p.into_inner());
            let mut directive = None;
            for fact in facts {
                if let Some(d) = view.apply(fact) {
                    directive = Some(d);
                }
            }
            (view.clone(), directive)
        };

        self.notify(&snapshot);
        if let Some(directive) = directive {
            self.navigate(&directive);
        }
    }

    /// Hydrate via the screen's bootstrap pull batch. Called once after
    /// every (re)connect.
    pub async fn hydrate(&self) {
        bootstrap::hydrate(self.endpoints.as_ref(), self.screen, |frame| {
            self.ingest_frame(frame);
        })
        .await;
    }

    /// Select an action by its stable key (position in the list).
    ///
    /// Sends the command fire-and-forget; if the descriptor carries a
    /// selected message, the action panel optimistically becomes a
    /// placeholder until the next authoritative `actions` fact.
    pub async fn select_action(&self, index: usize) -> Result<(), ServiceError> {
        let (command, selected_message) = {
            let mut view = self.view.lock().unwrap_or_else(|p| p.into_inner());
            let descriptor = view
                .actions
                .get(index)
                .ok_or(ServiceError::UnknownAction(index))?;
            let command = descriptor.command.clone();
            let selected_message = descriptor.selected_message.clone();
            if let Some(message) = &selected_message {
                view.actions.mark_selected(message.clone());
            }
            (command, selected_message)
        };

        if selected_message.is_some() {
            self.notify(&self.snapshot());
        }
        self.submit_command(&command).await
    }

    /// Issue the command behind a dialog choice. Does not hide the dialog;
    /// only a server `hide-dialog` fact does.
    pub async fn choose_dialog_option(&self, index: usize) -> Result<(), ServiceError> {
        let command = {
            let view = self.view.lock().unwrap_or_else(|p| p.into_inner());
            if !view.dialog.is_shown() {
                return Err(ServiceError::NoActiveDialog);
            }
            view.dialog
                .choice(index)
                .ok_or(ServiceError::UnknownDialogChoice(index))?
                .command
                .clone()
        };
        self.submit_command(&command).await
    }

    /// Send a chat message. No local echo: the entry comes back as a
    /// `chat` fact on the push channel.
    pub async fn send_chat(&self, message: &str) -> Result<(), ServiceError> {
        self.endpoints
            .post_chat(message)
            .await
            .map_err(ServiceError::Endpoint)
    }

    /// Submit a settings update.
    pub async fn submit_settings(&self, settings: &GameSettings) -> Result<(), ServiceError> {
        self.endpoints
            .post_settings(settings)
            .await
            .map_err(ServiceError::Endpoint)
    }

    async fn submit_command(&self, command: &str) -> Result<(), ServiceError> {
        self.endpoints
            .post_command(command)
            .await
            .map_err(ServiceError::Endpoint)
    }

    fn notify(&self, snapshot: &SessionView) {
        let listeners = self.listeners.lock().unwrap_or_else(|p| p.into_inner());
        for listener in listeners.iter() {
            listener(snapshot);
        }
    }

    fn navigate(&self, directive: &NavigationDirective) {
        let current = self.navigator.current_path();
        let target = resolve_target(&current, directive, self.screen.shutdown_resource());
        tracing::info!("navigating: {current} -> {target}");
        self.navigator.replace(&target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wolfden_client_adapters::infrastructure::testing::{
        fixtures, MockNavigator, MockSessionEndpoints,
    };

    fn service_with_mocks() -> (
        SessionService,
        Arc<MockSessionEndpoints>,
        Arc<MockNavigator>,
    ) {
        let endpoints = Arc::new(MockSessionEndpoints::new());
        let navigator = Arc::new(MockNavigator::new("/session/1/lobby"));
        let service = SessionService::new(ScreenKind::Lobby, endpoints.clone(), navigator.clone());
        (service, endpoints, navigator)
    }

    #[tokio::test]
    async fn selecting_an_action_submits_its_command_value() {
        let (service, endpoints, _) = service_with_mocks();
        service.ingest_frame(r#"{"actions": [["Start", "Start Game", "start"]]}"#);
        assert_eq!(service.snapshot().actions.descriptors().len(), 1);

        match service.select_action(0).await {
            Ok(()) => {}
            Err(e) => panic!("select failed: {e}"),
        }
        assert_eq!(endpoints.sent_commands(), vec!["start"]);
    }

    #[tokio::test]
    async fn selecting_with_a_message_sets_the_pending_overlay() {
        let endpoints = Arc::new(MockSessionEndpoints::new());
        let navigator = Arc::new(MockNavigator::new("/session/1/werewolves"));
        let service = SessionService::new(ScreenKind::Game, endpoints.clone(), navigator);

        service.ingest_frame(r#"{"actions": [["View your card", "peek", "You peeked."]]}"#);
        match service.select_action(0).await {
            Ok(()) => {}
            Err(e) => panic!("select failed: {e}"),
        }
        let view = service.snapshot();
        assert_eq!(view.actions.pending_message(), Some("You peeked."));
        assert_eq!(endpoints.sent_commands(), vec!["peek"]);

        // The next authoritative list overwrites the overlay.
        service.ingest_frame(r#"{"actions": [["Vote Alice", "vote:alice", ""]]}"#);
        assert_eq!(service.snapshot().actions.pending_message(), None);
    }

    #[tokio::test]
    async fn dialog_choices_dispatch_but_do_not_hide() {
        let (service, endpoints, _) = service_with_mocks();
        service.ingest_frame(fixtures::CHOOSE_PLAYERS_FRAME);
        assert!(service.snapshot().dialog.is_shown());

        match service.choose_dialog_option(1).await {
            Ok(()) => {}
            Err(e) => panic!("choose failed: {e}"),
        }
        assert_eq!(endpoints.sent_commands(), vec!["pick:2"]);
        // Still shown until the server says otherwise.
        assert!(service.snapshot().dialog.is_shown());

        service.ingest_frame(r#"{"hide-dialog": {}}"#);
        assert!(!service.snapshot().dialog.is_shown());
    }

    #[tokio::test]
    async fn dialog_choice_without_a_dialog_is_an_error() {
        let (service, endpoints, _) = service_with_mocks();
        assert!(matches!(
            service.choose_dialog_option(0).await,
            Err(ServiceError::NoActiveDialog)
        ));
        assert!(endpoints.sent_commands().is_empty());
    }

    #[tokio::test]
    async fn stale_action_index_is_an_error() {
        let (service, endpoints, _) = service_with_mocks();
        service.ingest_frame(r#"{"actions": [["Start", "Start Game", "start"]]}"#);
        assert!(matches!(
            service.select_action(5).await,
            Err(ServiceError::UnknownAction(5))
        ));
        assert!(endpoints.sent_commands().is_empty());
    }

    #[tokio::test]
    async fn chat_and_settings_reach_their_endpoints() {
        let (service, endpoints, _) = service_with_mocks();
        match service.send_chat("hello wolves").await {
            Ok(()) => {}
            Err(e) => panic!("chat failed: {e}"),
        }
        assert_eq!(endpoints.sent_chats(), vec!["hello wolves"]);

        let settings = fixtures::default_settings();
        match service.submit_settings(&settings).await {
            Ok(()) => {}
            Err(e) => panic!("settings failed: {e}"),
        }
        assert_eq!(endpoints.sent_settings(), vec![settings]);
    }

    #[tokio::test]
    async fn endpoint_failures_are_nonfatal_and_leave_state_consistent() {
        let (service, endpoints, _) = service_with_mocks();
        endpoints.fail_next();
        service.ingest_frame(r#"{"actions": [["Start", "Start Game", "start"]]}"#);
        assert!(matches!(
            service.select_action(0).await,
            Err(ServiceError::Endpoint(_))
        ));
        // The action list is untouched; the user can simply click again.
        assert_eq!(service.snapshot().actions.descriptors().len(), 1);
    }

    #[tokio::test]
    async fn install_app_navigates_to_a_sibling_path() {
        let (service, _, navigator) = service_with_mocks();
        service.ingest_frame(r#"{"install-app": "/werewolves"}"#);
        assert_eq!(navigator.replacements(), vec!["/session/1/werewolves"]);
    }

    #[tokio::test]
    async fn shut_down_navigates_to_the_exit_resource() {
        let (service, _, navigator) = service_with_mocks();
        service.ingest_frame(r#"{"shut-down": ""}"#);
        assert_eq!(navigator.replacements(), vec!["/session/1/logout"]);
    }

    #[tokio::test]
    async fn malformed_frames_are_dropped_without_stalling_the_stream() {
        let (service, _, _) = service_with_mocks();
        service.ingest_frame("not json");
        service.ingest_frame(r#"{"status": "Recovered"}"#);
        assert_eq!(service.snapshot().status.as_deref(), Some("Recovered"));
    }

    #[tokio::test]
    async fn frames_apply_atomically_before_listeners_run() {
        let (service, _, _) = service_with_mocks();
        let seen: Arc<Mutex<Vec<(Option<String>, usize)>>> = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        service.subscribe(move |view| {
            seen_clone
                .lock()
                .unwrap_or_else(|p| p.into_inner())
                .push((view.status.clone(), view.actions.descriptors().len()));
        });

        service.ingest_frame(
            r#"{"status": "Ready", "actions": [["Start", "Start Game", "start"]]}"#,
        );
        let observed = seen.lock().unwrap_or_else(|p| p.into_inner()).clone();
        // One notification for the whole frame, with both slots updated.
        assert_eq!(observed, vec![(Some("Ready".to_string()), 1)]);
    }

    #[tokio::test]
    async fn hydrate_feeds_pull_bodies_through_the_apply_path() {
        let (service, endpoints, _) = service_with_mocks();
        endpoints.set_pull_response("lobby/status", r#"{"status": "Waiting for players"}"#);
        endpoints.set_pull_response(
            "lobby/actions",
            r#"{"actions": [["Invite", "Invite players", "invite"]]}"#,
        );

        service.hydrate().await;

        let view = service.snapshot();
        assert_eq!(view.status.as_deref(), Some("Waiting for players"));
        assert_eq!(view.actions.descriptors()[0].command, "invite");
        assert_eq!(
            endpoints.pulled_paths(),
            vec!["lobby/status", "lobby/actions"]
        );
    }

    #[tokio::test]
    async fn pull_and_push_merge_last_writer_wins() {
        let (service, endpoints, _) = service_with_mocks();
        endpoints.set_pull_response("lobby/status", r#"{"status": "From pull"}"#);
        service.hydrate().await;
        assert_eq!(service.snapshot().status.as_deref(), Some("From pull"));

        service.ingest_frame(r#"{"status": "From push"}"#);
        assert_eq!(service.snapshot().status.as_deref(), Some("From push"));
    }
}
