//! Workspace configuration injected by Che into every workspace container.

use secrecy::SecretString;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not defined as environment variable")]
    Missing(&'static str),
}

/// Che API coordinates of the current workspace.
#[derive(Debug)]
pub struct CheEnv {
    pub workspace_id: String,
    /// Base URL of the workspace-management service
    pub api_url: String,
    pub machine_token: SecretString,
}

impl CheEnv {
    pub const WORKSPACE_ID: &str = "CHE_WORKSPACE_ID";
    pub const API: &str = "CHE_API";
    pub const MACHINE_TOKEN: &str = "CHE_MACHINE_TOKEN";

    /// Read the configuration through `lookup`, checking variables in a fixed
    /// order. A variable that is set but empty counts as defined.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

        let workspace_id = get(Self::WORKSPACE_ID)?;
        let api_url = get(Self::API)?;
        let machine_token = SecretString::from(get(Self::MACHINE_TOKEN)?);

        Ok(Self {
            workspace_id,
            api_url,
            machine_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| vars.get(k).cloned()
    }

    #[test]
    fn reads_all_three_variables() {
        let env = CheEnv::from_lookup(lookup(&[
            ("CHE_WORKSPACE_ID", "workspace42"),
            ("CHE_API", "http://che-host:8080/api"),
            ("CHE_MACHINE_TOKEN", "tok"),
        ]))
        .unwrap();
        assert_eq!(env.workspace_id, "workspace42");
        assert_eq!(env.api_url, "http://che-host:8080/api");
        assert_eq!(env.machine_token.expose_secret(), "tok");
    }

    #[test]
    fn missing_api_is_reported_by_name() {
        let err = CheEnv::from_lookup(lookup(&[
            ("CHE_WORKSPACE_ID", "w"),
            ("CHE_MACHINE_TOKEN", "t"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing("CHE_API")));
        assert_eq!(err.to_string(), "CHE_API is not defined as environment variable");
    }

    #[test]
    fn workspace_id_is_checked_first() {
        let err = CheEnv::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("CHE_WORKSPACE_ID")));
    }

    #[test]
    fn empty_value_counts_as_defined() {
        let env = CheEnv::from_lookup(lookup(&[
            ("CHE_WORKSPACE_ID", "w"),
            ("CHE_API", "http://api"),
            ("CHE_MACHINE_TOKEN", ""),
        ]))
        .unwrap();
        assert_eq!(env.machine_token.expose_secret(), "");
    }

    #[test]
    fn token_is_redacted_in_debug_output() {
        let env = CheEnv::from_lookup(lookup(&[
            ("CHE_WORKSPACE_ID", "w"),
            ("CHE_API", "http://api"),
            ("CHE_MACHINE_TOKEN", "super-secret-token"),
        ]))
        .unwrap();
        assert!(!format!("{env:?}").contains("super-secret-token"));
    }
}
