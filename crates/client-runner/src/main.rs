//! Wolfden Client Runner - composition root binary

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wolfden_client_adapters::infrastructure::{HttpSessionEndpoints, WsPushChannel};
use wolfden_client_ports::{PushChannelPort, SessionEndpointsPort};
use wolfden_protocol::ScreenKind;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("WOLFDEN_LOG")
                .unwrap_or_else(|_| "wolfden=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let screen = match std::env::var("WOLFDEN_SCREEN").as_deref() {
        Ok("game") | Ok("werewolves") => ScreenKind::Game,
        _ => ScreenKind::Lobby,
    };
    let base_url = std::env::var("WOLFDEN_BASE_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:8080/session/1/lobby/".to_string());
    let push_url = std::env::var("WOLFDEN_PUSH_URL")
        .unwrap_or_else(|_| "ws://127.0.0.1:8080/session/1/events".to_string());

    tracing::info!("starting wolfden client ({screen:?} screen) against {base_url}");

    let endpoints: Arc<dyn SessionEndpointsPort> =
        Arc::new(HttpSessionEndpoints::new(&base_url)?);
    let push: Arc<dyn PushChannelPort> = Arc::new(WsPushChannel::new(push_url));

    // The navigation base is the session path portion of the base URL.
    let base_path = url::Url::parse(&base_url)
        .map(|u| u.path().trim_end_matches('/').to_string())
        .unwrap_or_default();

    wolfden_client_runner::run(wolfden_client_runner::RunnerDeps {
        screen,
        endpoints,
        push,
        base_path,
    })
    .await
}
