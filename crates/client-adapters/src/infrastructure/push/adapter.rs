//! WebSocket adapter implementing the `PushChannelPort`

use std::sync::Arc;

use wolfden_client_ports::{ConnectionState, PushChannelPort};

use super::client::PushClient;
use super::supervisor::{PushSupervisor, ReconnectPolicy};

/// Port adapter wrapping a [`PushClient`] and its reconnect supervisor.
///
/// `start` spawns the supervisor on the current tokio runtime, so it must
/// be called from within one.
pub struct WsPushChannel {
    client: Arc<PushClient>,
    policy: ReconnectPolicy,
}

impl WsPushChannel {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Arc::new(PushClient::new(url)),
            policy: ReconnectPolicy::default(),
        }
    }

    pub fn with_policy(url: impl Into<String>, policy: ReconnectPolicy) -> Self {
        Self {
            client: Arc::new(PushClient::new(url)),
            policy,
        }
    }
}

impl PushChannelPort for WsPushChannel {
    fn state(&self) -> ConnectionState {
        self.client.state()
    }

    fn url(&self) -> &str {
        self.client.url()
    }

    fn start(&self) -> anyhow::Result<()> {
        let supervisor = PushSupervisor::new(Arc::clone(&self.client), self.policy);
        tokio::spawn(async move {
            supervisor.run().await;
        });
        Ok(())
    }

    fn shutdown(&self) {
        self.client.cancel();
    }

    fn set_on_frame(&self, callback: Box<dyn Fn(String) + Send + Sync + 'static>) {
        self.client.set_on_frame(callback);
    }

    fn set_on_state_change(&self, callback: Box<dyn Fn(ConnectionState) + Send + Sync + 'static>) {
        self.client.set_on_state_change(callback);
    }
}
