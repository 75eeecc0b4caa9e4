//! Che CLI commands.
//!
//! The entry point parses a [`Commands`] value and runs it against a
//! [`CommandContext`], which carries everything a command reads from the
//! host process (environment, working directory, gateway address). Nothing
//! is registered globally.

pub mod config;
pub mod context;
pub mod error;
pub mod open;
pub mod registry;
pub mod target;

pub use config::{CheEnv, ConfigError};
pub use context::CommandContext;
pub use error::{CommandError, ErrorKind};
pub use open::OpenArgs;
pub use registry::Commands;
