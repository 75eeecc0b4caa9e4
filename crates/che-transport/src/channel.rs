//! WebSocket client for the editor gateway's CLI endpoint.

use che_protocol::encode_open_file_frames;
use futures_util::SinkExt;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async,
    tungstenite::{
        Message,
        client::IntoClientRequest,
        http::{HeaderValue, header::ORIGIN},
    },
};
use tracing::{debug, info};

use crate::error::ChannelError;

/// Address of the editor gateway inside the workspace.
pub const DEFAULT_GATEWAY_URL: &str = "ws://127.0.0.1:3100/services";

#[derive(Debug, Clone)]
pub struct ChannelConfig {
    /// WebSocket URL of the gateway
    pub gateway_url: String,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            gateway_url: DEFAULT_GATEWAY_URL.into(),
        }
    }
}

/// An open connection to the editor gateway.
///
/// Consumed by [`CommandChannel::open_file`], which always closes it.
pub struct CommandChannel<S = MaybeTlsStream<TcpStream>> {
    stream: WebSocketStream<S>,
    peer: String,
}

impl CommandChannel {
    /// Connect to the gateway, presenting `origin` (the editor's control
    /// endpoint) as the `Origin` header.
    pub async fn connect(config: &ChannelConfig, origin: &str) -> Result<Self, ChannelError> {
        let origin_header = HeaderValue::from_str(origin).map_err(|_| ChannelError::InvalidOrigin {
            origin: origin.to_string(),
        })?;

        let mut request = config
            .gateway_url
            .as_str()
            .into_client_request()
            .map_err(ChannelError::Connect)?;
        request.headers_mut().insert(ORIGIN, origin_header);

        debug!("Connecting to editor gateway {} (origin {origin})", config.gateway_url);
        let (stream, _) = connect_async(request).await.map_err(ChannelError::Connect)?;

        Ok(Self::from_stream(stream, config.gateway_url.clone()))
    }
}

impl<S> CommandChannel<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Wrap an already established WebSocket; `peer` names it in logs.
    pub fn from_stream(stream: WebSocketStream<S>, peer: impl Into<String>) -> Self {
        Self {
            stream,
            peer: peer.into(),
        }
    }

    /// Ask the editor to open `file`, then close the connection whether or
    /// not the frames went out.
    pub async fn open_file(mut self, file: &str) -> Result<(), ChannelError> {
        let result = self.send_open_file(file).await;
        self.close().await;
        result
    }

    async fn send_open_file(&mut self, file: &str) -> Result<(), ChannelError> {
        let [open, data] = encode_open_file_frames(file)?;
        self.send("open", open).await?;
        self.send("data", data).await?;
        info!("Requested editor to open {file}");
        Ok(())
    }

    async fn send(&mut self, frame: &'static str, text: String) -> Result<(), ChannelError> {
        debug!("-> {frame}: {text}");
        self.stream
            .send(Message::Text(text.into()))
            .await
            .map_err(|source| ChannelError::Transmit { frame, source })
    }

    /// Best-effort close handshake; the socket is released when `self` drops.
    pub async fn close(mut self) {
        if let Err(e) = self.stream.close(None).await {
            debug!("Close handshake with {} failed: {e}", self.peer);
        }
    }
}
