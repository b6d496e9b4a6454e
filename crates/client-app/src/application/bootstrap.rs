//! Bootstrap sequencer
//!
//! On every (re)connect the screen's fixed pull batch hydrates the state
//! store without waiting for the first push frame. Pull responses are
//! ordinary event frames fed through the same decode/apply path, so a pull
//! and a later push carrying the same fact kind merge identically and the
//! last writer wins. Failures are logged and skipped; hydration is
//! best-effort.

use wolfden_client_ports::SessionEndpointsPort;
use wolfden_protocol::ScreenKind;

/// Issue the screen's pull batch in order, handing any non-empty response
/// body to `sink` (the service's frame-ingestion path).
pub async fn hydrate<F>(endpoints: &dyn SessionEndpointsPort, screen: ScreenKind, mut sink: F)
where
    F: FnMut(&str),
{
    for path in screen.bootstrap_paths() {
        match endpoints.pull(path).await {
            Ok(Some(body)) => sink(&body),
            // Empty response: the server answers over the push channel.
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("bootstrap pull {path} failed: {e}");
            }
        }
    }
}
