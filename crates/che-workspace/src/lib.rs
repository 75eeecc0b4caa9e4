//! Che workspace discovery.
//!
//! Fetches a workspace's runtime descriptor from the Che API and locates the
//! embedded editor's control server (`theia`) inside it.

pub mod descriptor;
pub mod error;
pub mod resolver;

pub use descriptor::{ControlEndpoint, Node, THEIA_SERVER, extract_control_endpoint};
pub use error::WorkspaceError;
pub use resolver::WorkspaceResolver;
