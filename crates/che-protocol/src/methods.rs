//! Method names and channel paths understood by the editor gateway.

/// JSON-RPC method names exposed by the CLI endpoint.
pub struct Methods;

impl Methods {
    pub const OPEN_FILE: &str = "openFile";
}

/// Gateway paths.
pub struct Paths;

impl Paths {
    /// WebSocket path the gateway listens on.
    pub const SERVICES: &str = "/services";
    /// Logical channel for CLI commands, multiplexed over [`Paths::SERVICES`].
    pub const CLI_ENDPOINT: &str = "/services/cli-endpoint";
}

/// Correlation id used for the single-shot open exchange.
pub const DEFAULT_CHANNEL_ID: i64 = 0;
