//! Che API client for workspace runtime descriptors.

use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::descriptor::{ControlEndpoint, extract_control_endpoint};
use crate::error::WorkspaceError;

/// Fetches workspace details from `<base_url>/workspace/<id>?token=<token>`.
pub struct WorkspaceResolver {
    http: Client,
    base_url: String,
    token: SecretString,
}

impl WorkspaceResolver {
    pub fn new(base_url: impl Into<String>, token: SecretString) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Workspace details URL without the token query.
    pub fn workspace_url(&self, workspace_id: &str) -> String {
        format!("{}/workspace/{}", self.base_url, workspace_id)
    }

    /// Issue one GET for the workspace and return the raw body.
    pub async fn fetch_runtime(&self, workspace_id: &str) -> Result<String, WorkspaceError> {
        let url = self.workspace_url(workspace_id);
        debug!("GET {url}?token=<redacted>");

        let res = self
            .http
            .get(&url)
            .query(&[("token", self.token.expose_secret())])
            .send()
            .await
            .map_err(network_error)?;

        let status = res.status();
        if status != StatusCode::OK {
            return Err(WorkspaceError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        res.text().await.map_err(network_error)
    }

    /// Fetch the workspace and locate its editor control endpoint.
    pub async fn resolve_endpoint(
        &self,
        workspace_id: &str,
    ) -> Result<ControlEndpoint, WorkspaceError> {
        let body = self.fetch_runtime(workspace_id).await?;
        extract_control_endpoint(&body)
    }
}

/// reqwest errors carry the request URL, token query included.
fn network_error(e: reqwest::Error) -> WorkspaceError {
    WorkspaceError::Network(e.without_url())
}
