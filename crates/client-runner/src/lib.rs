//! Wolfden Client Runner - composition root and terminal shell
//!
//! Wires the session service to the push channel and HTTP endpoints, then
//! drives a minimal line-oriented terminal UI. The renderer is a pure
//! function of a `SessionView` snapshot plus the connection state; every
//! state change reprints the whole screen.

use std::fmt::Write as _;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncBufReadExt, BufReader};

use wolfden_client_app::{SessionService, SessionView};
use wolfden_client_ports::{ConnectionState, NavigatorPort, PushChannelPort, SessionEndpointsPort};
use wolfden_protocol::{DialogSpec, GameSettings, ScreenKind};

pub struct RunnerDeps {
    pub screen: ScreenKind,
    pub endpoints: Arc<dyn SessionEndpointsPort>,
    pub push: Arc<dyn PushChannelPort>,
    pub base_path: String,
}

/// Terminal navigator: a redirect ends the session view, so it prints the
/// target and asks the run loop to exit.
struct TerminalNavigator {
    path: Mutex<String>,
    exited: Arc<AtomicBool>,
}

impl TerminalNavigator {
    fn new(path: String, exited: Arc<AtomicBool>) -> Self {
        Self {
            path: Mutex::new(path),
            exited,
        }
    }
}

impl NavigatorPort for TerminalNavigator {
    fn current_path(&self) -> String {
        self.path.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    fn replace(&self, path: &str) {
        let mut current = self.path.lock().unwrap_or_else(|p| p.into_inner());
        *current = path.to_string();
        println!("\nsession over, continue at: {path}");
        self.exited.store(true, Ordering::SeqCst);
    }
}

pub async fn run(deps: RunnerDeps) -> anyhow::Result<()> {
    let exited = Arc::new(AtomicBool::new(false));
    let navigator: Arc<dyn NavigatorPort> = Arc::new(TerminalNavigator::new(
        deps.base_path.clone(),
        exited.clone(),
    ));
    let service = Arc::new(SessionService::new(
        deps.screen,
        deps.endpoints,
        navigator,
    ));

    {
        let service = service.clone();
        deps.push
            .set_on_frame(Box::new(move |frame| service.ingest_frame(&frame)));
    }
    {
        // Every (re)connect triggers a full rehydrate; push frames that
        // arrive meanwhile interleave safely because application is
        // idempotent per fact.
        let service = service.clone();
        deps.push.set_on_state_change(Box::new(move |state| {
            println!("[connection: {state:?}]");
            if state == ConnectionState::Connected {
                let service = service.clone();
                tokio::spawn(async move {
                    service.hydrate().await;
                });
            }
        }));
    }
    service.subscribe(|view| print!("{}", render(view)));

    deps.push.start()?;

    print_help();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        if exited.load(Ordering::SeqCst) {
            break;
        }
        if let Err(e) = dispatch(&service, line.trim()).await {
            println!("error: {e}");
        }
        if matches!(line.trim(), "q" | "quit") {
            break;
        }
    }

    deps.push.shutdown();
    Ok(())
}

async fn dispatch(service: &SessionService, line: &str) -> anyhow::Result<()> {
    let (verb, rest) = match line.split_once(' ') {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    match verb {
        "" => {}
        "a" => {
            let index: usize = rest.parse()?;
            service.select_action(index).await?;
        }
        "d" => {
            let index: usize = rest.parse()?;
            service.choose_dialog_option(index).await?;
        }
        "c" => {
            service.send_chat(rest).await?;
        }
        "t" => match current_settings(service) {
            Some(mut settings) => {
                let enabled = settings.roles.get(rest).copied().unwrap_or(false);
                settings.roles.insert(rest.to_string(), !enabled);
                service.submit_settings(&settings).await?;
            }
            None => println!("no settings yet"),
        },
        "w" => match current_settings(service) {
            Some(mut settings) => {
                settings.werewolves = rest.parse()?;
                service.submit_settings(&settings).await?;
            }
            None => println!("no settings yet"),
        },
        "q" | "quit" => {}
        "h" | "help" => print_help(),
        other => println!("unknown command: {other} (h for help)"),
    }
    Ok(())
}

fn current_settings(service: &SessionService) -> Option<GameSettings> {
    service.snapshot().settings
}

fn print_help() {
    println!(
        "commands: a <n> select action | d <n> dialog choice | c <msg> chat\n\
         | t <role> toggle role | w <n> werewolf count | q quit"
    );
}

/// Render a snapshot to a printable block. Pure; no locking, no IO.
pub fn render(view: &SessionView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "----------------------------------------");
    if let Some(status) = &view.status {
        let _ = writeln!(out, "status: {status}");
    }
    if let Some(user_id) = &view.player.user_id {
        match &view.player.role {
            Some(role) => {
                let _ = writeln!(out, "you: {user_id} ({role})");
            }
            None => {
                let _ = writeln!(out, "you: {user_id}");
            }
        }
    }
    if let Some(settings) = &view.settings {
        let enabled: Vec<&str> = settings
            .roles
            .iter()
            .filter(|(_, on)| **on)
            .map(|(tag, _)| tag.as_str())
            .collect();
        let _ = writeln!(
            out,
            "settings: {} werewolves, roles [{}]",
            settings.werewolves,
            enabled.join(", ")
        );
    }
    if !view.game_info.is_empty() {
        let cards: Vec<String> = view
            .game_info
            .iter()
            .map(|c| format!("{} x{}", c.card, c.count))
            .collect();
        let _ = writeln!(out, "cards in play: {}", cards.join(", "));
    }

    if let Some(results) = &view.results {
        let _ = writeln!(out, "\n== {} ==", results.winner_text);
        for row in &results.voting_table {
            let marker = if row.eliminated { " [eliminated]" } else { "" };
            let _ = writeln!(out, "  {} voted for {}{}", row.player, row.voted_for, marker);
        }
        for row in &results.player_role_table {
            let _ = writeln!(
                out,
                "  {}: dealt {}, ended as {}",
                row.player, row.dealt_role, row.final_role
            );
        }
        for row in &results.table_roles {
            let _ = writeln!(out, "  table: dealt {}, ended as {}", row.dealt_role, row.final_role);
        }
    } else {
        if let Some(phase) = &view.phase {
            let _ = writeln!(out, "\n[{}] {}", phase.title, phase.description);
        }
        match view.actions.pending_message() {
            Some(message) => {
                let _ = writeln!(out, "\n> {message}");
            }
            None => {
                if !view.actions.descriptors().is_empty() {
                    let _ = writeln!(out, "\nactions:");
                }
                for (i, action) in view.actions.descriptors().iter().enumerate() {
                    let _ = writeln!(out, "  [{i}] {} - {}", action.label, action.description);
                }
            }
        }
    }

    if let Some(DialogSpec::ChoosePlayers { choices }) = view.dialog.active() {
        let _ = writeln!(out, "\nchoose a player:");
        for (i, choice) in choices.iter().enumerate() {
            let _ = writeln!(out, "  [{i}] {}", choice.label);
        }
    }

    if let Some(newest) = view.output.newest() {
        let _ = writeln!(out, "\n{newest}");
    }
    for entry in view.chat.iter().take(5) {
        let _ = writeln!(out, "chat | {}: {}", entry.sender, entry.message);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use wolfden_client_app::application::store::PlayerIdentity;
    use wolfden_protocol::ActionDescriptor;

    #[test]
    fn render_lists_actions_with_their_keys() {
        let mut view = SessionView::new();
        view.status = Some("Waiting".to_string());
        view.player = PlayerIdentity {
            user_id: Some("alice".to_string()),
            role: None,
        };
        view.actions.replace(vec![ActionDescriptor {
            label: "Start".to_string(),
            description: "Start Game".to_string(),
            command: "start".to_string(),
            selected_message: None,
        }]);

        let text = render(&view);
        assert!(text.contains("status: Waiting"));
        assert!(text.contains("you: alice"));
        assert!(text.contains("[0] Start - Start Game"));
    }

    #[test]
    fn render_retires_actions_once_results_arrive() {
        let mut view = SessionView::new();
        view.actions.replace(vec![ActionDescriptor {
            label: "Vote".to_string(),
            description: "Vote".to_string(),
            command: "vote".to_string(),
            selected_message: None,
        }]);
        view.results = Some(wolfden_protocol::PostGameResults {
            winner_text: "Village wins!".to_string(),
            voting_table: Vec::new(),
            player_role_table: Vec::new(),
            table_roles: Vec::new(),
        });

        let text = render(&view);
        assert!(text.contains("Village wins!"));
        assert!(!text.contains("[0] Vote"));
    }
}
