//! JSON-RPC 2.0 request carried inside a data envelope.

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;
use crate::methods::Methods;

/// `openFile` request. `params` is the absolute path of the file, passed
/// positionally as a bare string rather than an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenFileRequest {
    pub jsonrpc: String,
    pub id: i64,
    pub method: String,
    pub params: String,
}

impl OpenFileRequest {
    pub fn new(id: i64, file: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            id,
            method: Methods::OPEN_FILE.into(),
            params: file.into(),
        }
    }

    pub fn encode(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(ProtocolError::Encoding)
    }

    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(text).map_err(ProtocolError::Decoding)
    }
}
