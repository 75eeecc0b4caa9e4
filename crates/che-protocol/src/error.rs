//! Protocol error type.

use thiserror::Error;

/// Failure while turning a message into (or back from) its wire text.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Unable to marshal JSON: {0}")]
    Encoding(#[source] serde_json::Error),

    #[error("Unable to parse message: {0}")]
    Decoding(#[source] serde_json::Error),
}
