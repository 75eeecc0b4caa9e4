//! Transport-level frames multiplexing logical channels over one connection.
//!
//! A logical channel is first established with an `open` envelope and then
//! carries `data` envelopes addressed to the same path and id:
//!
//! ```text
//! {"path":"/services/cli-endpoint","kind":"open","id":0}
//! {"path":"/services/cli-endpoint","kind":"data","id":0,"content":"<json-rpc text>"}
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;
use crate::jsonrpc::OpenFileRequest;
use crate::methods::{DEFAULT_CHANNEL_ID, Paths};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeKind {
    Open,
    Data,
}

/// Outer frame written to the gateway WebSocket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelEnvelope {
    pub path: String,
    pub kind: EnvelopeKind,
    /// Correlates frames belonging to the same logical channel.
    pub id: i64,
    /// Serialized application payload; only present on `data` frames.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ChannelEnvelope {
    pub fn open(path: impl Into<String>, id: i64) -> Self {
        Self {
            path: path.into(),
            kind: EnvelopeKind::Open,
            id,
            content: None,
        }
    }

    pub fn data(path: impl Into<String>, id: i64, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EnvelopeKind::Data,
            id,
            content: Some(content.into()),
        }
    }

    pub fn encode(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(ProtocolError::Encoding)
    }

    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(text).map_err(ProtocolError::Decoding)
    }

    /// Decode the embedded JSON-RPC request of a `data` frame.
    ///
    /// Returns `None` for `open` frames, which carry no content.
    pub fn open_file_request(&self) -> Option<Result<OpenFileRequest, ProtocolError>> {
        self.content.as_deref().map(OpenFileRequest::decode)
    }
}

/// Build the two frames that ask the editor to open `file`, in send order:
/// the `open` envelope for the CLI endpoint, then the `data` envelope with
/// the `openFile` request.
pub fn encode_open_file_frames(file: &str) -> Result<[String; 2], ProtocolError> {
    let open = ChannelEnvelope::open(Paths::CLI_ENDPOINT, DEFAULT_CHANNEL_ID).encode()?;

    let request = OpenFileRequest::new(DEFAULT_CHANNEL_ID, file).encode()?;
    let data = ChannelEnvelope::data(Paths::CLI_ENDPOINT, DEFAULT_CHANNEL_ID, request).encode()?;

    Ok([open, data])
}
