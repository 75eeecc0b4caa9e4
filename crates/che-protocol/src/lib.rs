//! Che editor control protocol - message types.
//!
//! The embedded editor gateway multiplexes logical channels over a single
//! WebSocket. Every frame is a [`ChannelEnvelope`]; application requests are
//! JSON-RPC 2.0 objects serialized to a string and carried in the envelope's
//! `content` field.

pub mod envelope;
pub mod error;
pub mod jsonrpc;
pub mod methods;

pub use envelope::{ChannelEnvelope, EnvelopeKind, encode_open_file_frames};
pub use error::ProtocolError;
pub use jsonrpc::OpenFileRequest;
pub use methods::{DEFAULT_CHANNEL_ID, Methods, Paths};
