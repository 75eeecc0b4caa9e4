//! Workspace lookup errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// The request could not be sent or the response body could not be read.
    #[error("Unable to get workspace details: {0}")]
    Network(#[source] reqwest::Error),

    /// The Che API answered with something other than 200.
    #[error("Unable to get workspace details: status {status}")]
    UpstreamStatus { status: u16 },

    /// The runtime descriptor does not have the expected shape.
    #[error("Unable to get workspace details: {0}")]
    Schema(String),

    #[error("no running editor (theia) server found in workspace runtime")]
    EndpointNotFound,
}

impl WorkspaceError {
    pub(crate) fn schema(message: impl Into<String>) -> Self {
        Self::Schema(message.into())
    }
}
