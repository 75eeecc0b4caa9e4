//! Command channel errors.

use che_protocol::ProtocolError;
use thiserror::Error;
use tokio_tungstenite::tungstenite;

#[derive(Debug, Error)]
pub enum ChannelError {
    /// No gateway accepted the connection.
    #[error("Eclipse Che IDE is not running: {0}")]
    Connect(#[source] tungstenite::Error),

    /// The control endpoint cannot be sent as an `Origin` header.
    #[error("Eclipse Che IDE is not running: invalid origin {origin:?}")]
    InvalidOrigin { origin: String },

    #[error(transparent)]
    Encoding(#[from] ProtocolError),

    #[error("Unable to send {frame} frame: {source}")]
    Transmit {
        frame: &'static str,
        #[source]
        source: tungstenite::Error,
    },
}
