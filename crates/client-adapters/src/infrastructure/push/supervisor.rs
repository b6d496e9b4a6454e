//! Reconnect supervision for the push channel
//!
//! The wire protocol has no resume semantics, so the recovery strategy is
//! always the same: reconnect with exponential backoff plus jitter, then
//! rehydrate the full state via the bootstrap pull batch (the service
//! hooks rehydration to the Connected state-change). Retries are
//! unbounded; a stale-but-visible "disconnected" state is preferable to
//! giving up silently.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;

use wolfden_client_ports::ConnectionState;

use super::client::PushClient;

/// Exponential backoff parameters.
#[derive(Debug, Clone, Copy)]
pub struct ReconnectPolicy {
    pub base: Duration,
    pub max: Duration,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self {
            base: Duration::from_secs(1),
            max: Duration::from_secs(30),
        }
    }
}

impl ReconnectPolicy {
    /// Delay before retry `attempt` (0-based): base * 2^attempt, capped at
    /// max, with up to 50% random jitter to avoid thundering herds.
    pub fn delay(&self, attempt: u32) -> Duration {
        let exp = self
            .base
            .saturating_mul(2u32.saturating_pow(attempt.min(16)))
            .min(self.max);
        let jitter_ms = rand::thread_rng().gen_range(0..=exp.as_millis() as u64 / 2);
        exp + Duration::from_millis(jitter_ms)
    }
}

pub struct PushSupervisor {
    client: Arc<PushClient>,
    policy: ReconnectPolicy,
}

impl PushSupervisor {
    pub fn new(client: Arc<PushClient>, policy: ReconnectPolicy) -> Self {
        Self { client, policy }
    }

    /// Pump connections until the client is cancelled. Each clean close
    /// resets the backoff; consecutive failures widen it.
    pub async fn run(&self) {
        let mut attempt: u32 = 0;
        loop {
            if self.client.is_cancelled() {
                break;
            }
            match self.client.run_once().await {
                Ok(()) => {
                    attempt = 0;
                }
                Err(_) => {
                    attempt = attempt.saturating_add(1);
                }
            }
            if self.client.is_cancelled() {
                break;
            }

            let delay = self.policy.delay(attempt);
            tracing::info!(
                "push channel down, reconnecting in {:.1}s",
                delay.as_secs_f32()
            );
            self.client.set_state(ConnectionState::Reconnecting);
            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_grows_and_caps() {
        let policy = ReconnectPolicy::default();
        // Jitter adds at most 50%, so bounds are deterministic.
        let d0 = policy.delay(0);
        assert!(d0 >= Duration::from_secs(1) && d0 <= Duration::from_millis(1500));

        let d2 = policy.delay(2);
        assert!(d2 >= Duration::from_secs(4) && d2 <= Duration::from_secs(6));

        let d_large = policy.delay(20);
        assert!(d_large >= Duration::from_secs(30) && d_large <= Duration::from_secs(45));
    }
}
