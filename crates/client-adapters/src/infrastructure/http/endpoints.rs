//! HTTP adapter for the session endpoints
//!
//! Commands and chat go out form-encoded; settings go out as JSON;
//! bootstrap pulls are plain GETs whose body, when non-empty, is an event
//! frame. All paths are relative to the session base URL, which therefore
//! has to end with a trailing slash so `Url::join` keeps the session
//! segment.

use anyhow::{Context, Result};
use async_trait::async_trait;
use url::Url;

use wolfden_client_ports::SessionEndpointsPort;
use wolfden_protocol::{ChatPost, CommandRequest, GameSettings};

pub struct HttpSessionEndpoints {
    base: Url,
    http: reqwest::Client,
}

impl HttpSessionEndpoints {
    /// `base` is the session root, e.g. `http://host/session/1/lobby/`.
    /// A missing trailing slash is corrected here rather than rejected.
    pub fn new(base: &str) -> Result<Self> {
        let normalized = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{base}/")
        };
        let base = Url::parse(&normalized)
            .with_context(|| format!("invalid session base url: {normalized}"))?;
        Ok(Self {
            base,
            http: reqwest::Client::new(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        // Pull paths may arrive with a leading slash; keep them relative.
        let relative = path.trim_start_matches('/');
        self.base
            .join(relative)
            .with_context(|| format!("invalid endpoint path: {path}"))
    }
}

#[async_trait]
impl SessionEndpointsPort for HttpSessionEndpoints {
    async fn post_command(&self, command: &str) -> Result<()> {
        let url = self.endpoint("action")?;
        tracing::debug!(%command, "posting command");
        self.http
            .post(url)
            .form(&CommandRequest { command })
            .send()
            .await
            .context("command request failed")?
            .error_for_status()
            .context("command rejected by server")?;
        Ok(())
    }

    async fn post_chat(&self, message: &str) -> Result<()> {
        let url = self.endpoint("chat")?;
        self.http
            .post(url)
            .form(&ChatPost { message })
            .send()
            .await
            .context("chat request failed")?
            .error_for_status()
            .context("chat rejected by server")?;
        Ok(())
    }

    async fn post_settings(&self, settings: &GameSettings) -> Result<()> {
        let url = self.endpoint("settings")?;
        self.http
            .post(url)
            .json(settings)
            .send()
            .await
            .context("settings request failed")?
            .error_for_status()
            .context("settings rejected by server")?;
        Ok(())
    }

    async fn pull(&self, path: &str) -> Result<Option<String>> {
        let url = self.endpoint(path)?;
        tracing::debug!(%path, "bootstrap pull");
        let body = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("pull of {path} failed"))?
            .error_for_status()
            .with_context(|| format!("pull of {path} rejected"))?
            .text()
            .await
            .context("pull body was not readable text")?;
        if body.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_added() {
        let endpoints = HttpSessionEndpoints::new("http://host/session/1/lobby").unwrap();
        let url = endpoints.endpoint("action").unwrap();
        assert_eq!(url.as_str(), "http://host/session/1/lobby/action");
    }

    #[test]
    fn leading_slash_on_pull_paths_stays_relative() {
        let endpoints = HttpSessionEndpoints::new("http://host/session/1/lobby/").unwrap();
        let url = endpoints.endpoint("/lobby/status").unwrap();
        assert_eq!(url.as_str(), "http://host/session/1/lobby/lobby/status");
    }
}
