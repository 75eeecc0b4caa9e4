//! Runtime descriptor traversal.
//!
//! The Che API does not guarantee the descriptor's schema, so the body is
//! walked through [`Node`], a typed view over `serde_json::Value` that makes
//! every presence and shape check explicit:
//!
//! ```text
//! { "runtime": { "machines": { "<machine>": { "servers": { "theia": { "url": "..." } } } } } }
//! ```

use std::fmt;

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::WorkspaceError;

/// Server name under which the embedded editor exposes its control server.
pub const THEIA_SERVER: &str = "theia";

/// Typed view of one node of a JSON tree.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Object(&'a Map<String, Value>),
    Array(&'a [Value]),
    String(&'a str),
    /// Numbers, booleans and `null`.
    Other(&'a Value),
    Absent,
}

impl<'a> Node<'a> {
    pub fn new(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => Self::Object(map),
            Value::Array(items) => Self::Array(items),
            Value::String(s) => Self::String(s),
            other => Self::Other(other),
        }
    }

    /// Look up `key`; anything that is not an object has no children.
    pub fn child(&self, key: &str) -> Node<'a> {
        match *self {
            Self::Object(map) => map.get(key).map(Node::new).unwrap_or(Node::Absent),
            _ => Node::Absent,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn shape(&self) -> &'static str {
        match self {
            Self::Object(_) => "object",
            Self::Array(_) => "array",
            Self::String(_) => "string",
            Self::Other(Value::Null) => "null",
            Self::Other(Value::Bool(_)) => "boolean",
            Self::Other(_) => "number",
            Self::Absent => "absent",
        }
    }

    fn expect_object(self, what: &str) -> Result<&'a Map<String, Value>, WorkspaceError> {
        match self {
            Self::Object(map) => Ok(map),
            Self::Absent => Err(WorkspaceError::schema(format!("missing `{what}`"))),
            other => Err(WorkspaceError::schema(format!(
                "`{what}` is {} instead of an object",
                other.shape()
            ))),
        }
    }
}

/// URL of the embedded editor's control server. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlEndpoint(String);

impl ControlEndpoint {
    pub fn new(url: impl Into<String>) -> Option<Self> {
        let url = url.into();
        (!url.is_empty()).then_some(Self(url))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ControlEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Locate the `theia` server URL in a raw runtime descriptor.
///
/// Machines are visited in name order and the first one exposing a
/// non-empty `theia` URL wins.
pub fn extract_control_endpoint(body: &str) -> Result<ControlEndpoint, WorkspaceError> {
    let root: Value = serde_json::from_str(body)
        .map_err(|e| WorkspaceError::schema(format!("invalid JSON body: {e}")))?;
    let root = Node::new(&root);
    root.expect_object("workspace")?;

    let runtime = Node::Object(root.child("runtime").expect_object("runtime")?);
    let machines = runtime.child("machines").expect_object("runtime.machines")?;

    let mut entries: Vec<(&String, &Value)> = machines.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut found: Vec<(&str, ControlEndpoint)> = Vec::new();
    for (name, machine) in entries {
        if let Some(endpoint) = machine_endpoint(name, Node::new(machine))? {
            found.push((name.as_str(), endpoint));
        }
    }

    let mut found = found.into_iter();
    let Some((machine, endpoint)) = found.next() else {
        return Err(WorkspaceError::EndpointNotFound);
    };

    let ignored: Vec<&str> = found.map(|(name, _)| name).collect();
    if !ignored.is_empty() {
        info!(
            "Multiple machines expose a {THEIA_SERVER} server; using `{machine}`, ignoring {ignored:?}"
        );
    }

    debug!("Editor control endpoint on machine `{machine}`: {endpoint}");
    Ok(endpoint)
}

/// The `theia` URL of one machine, if it has a usable one.
fn machine_endpoint(
    name: &str,
    machine: Node<'_>,
) -> Result<Option<ControlEndpoint>, WorkspaceError> {
    let at = format!("runtime.machines.{name}");
    let machine = Node::Object(machine.expect_object(&at)?);

    let servers = machine.child("servers");
    if servers.is_absent() {
        return Ok(None);
    }
    let servers = Node::Object(servers.expect_object(&format!("{at}.servers"))?);

    let theia = servers.child(THEIA_SERVER);
    if theia.is_absent() {
        return Ok(None);
    }
    let theia = Node::Object(theia.expect_object(&format!("{at}.servers.{THEIA_SERVER}"))?);

    match theia.child("url") {
        Node::Absent => Ok(None),
        Node::String(url) => Ok(ControlEndpoint::new(url)),
        other => Err(WorkspaceError::schema(format!(
            "`{at}.servers.{THEIA_SERVER}.url` is {} instead of a string",
            other.shape()
        ))),
    }
}
