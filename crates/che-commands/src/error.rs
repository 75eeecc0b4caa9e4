//! Command errors. Every variant is terminal for the invocation.

use std::path::PathBuf;

use che_transport::ChannelError;
use che_workspace::WorkspaceError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("The filename argument is required")]
    MissingArgument,

    #[error("File {} is wrong", path.display())]
    InvalidPath { path: PathBuf },

    #[error("File {} does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Workspace(#[from] WorkspaceError),

    #[error(transparent)]
    Channel(#[from] ChannelError),
}

/// Failure category, stable across message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Argument,
    Filesystem,
    Config,
    Network,
    UpstreamStatus,
    Schema,
    EndpointNotFound,
    Connect,
    Encoding,
    Transmit,
}

impl CommandError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgument => ErrorKind::Argument,
            Self::InvalidPath { .. } | Self::NotFound { .. } => ErrorKind::Filesystem,
            Self::Config(_) => ErrorKind::Config,
            Self::Workspace(e) => match e {
                WorkspaceError::Network(_) => ErrorKind::Network,
                WorkspaceError::UpstreamStatus { .. } => ErrorKind::UpstreamStatus,
                WorkspaceError::Schema(_) => ErrorKind::Schema,
                WorkspaceError::EndpointNotFound => ErrorKind::EndpointNotFound,
            },
            Self::Channel(e) => match e {
                ChannelError::Connect(_) | ChannelError::InvalidOrigin { .. } => ErrorKind::Connect,
                ChannelError::Encoding(_) => ErrorKind::Encoding,
                ChannelError::Transmit { .. } => ErrorKind::Transmit,
            },
        }
    }
}
