//! Che editor command channel.
//!
//! Connects to the embedded editor's local WebSocket gateway and delivers
//! commands as envelope frames. The connection lives only for the duration
//! of one command and is closed on every exit path.

pub mod channel;
pub mod error;

pub use channel::{ChannelConfig, CommandChannel, DEFAULT_GATEWAY_URL};
pub use error::ChannelError;
