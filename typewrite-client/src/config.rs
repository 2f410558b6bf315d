//! Connection settings for an Appwrite project.

use miette::Diagnostic;
use thiserror::Error;

pub const ENDPOINT_VAR: &str = "APPWRITE_ENDPOINT";
pub const PROJECT_ID_VAR: &str = "APPWRITE_PROJECT_ID";
pub const API_KEY_VAR: &str = "APPWRITE_API_KEY";

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("missing environment variables: {}", .missing.join(", "))]
    #[diagnostic(
        code(typewrite::config::missing_env),
        help(
            "Please provide APPWRITE_ENDPOINT, APPWRITE_PROJECT_ID, and APPWRITE_API_KEY as environment variables."
        )
    )]
    MissingVariables { missing: Vec<&'static str> },
}

/// Endpoint and credentials used for every request.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    pub project_id: String,
    pub api_key: String,
}

impl Config {
    pub fn new(
        endpoint: impl Into<String>,
        project_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let endpoint: String = endpoint.into();
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            project_id: project_id.into(),
            api_key: api_key.into(),
        }
    }

    /// Read the three `APPWRITE_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut read = |name: &'static str| match lookup(name) {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                missing.push(name);
                String::new()
            }
        };

        let endpoint = read(ENDPOINT_VAR);
        let project_id = read(PROJECT_ID_VAR);
        let api_key = read(API_KEY_VAR);

        if !missing.is_empty() {
            return Err(ConfigError::MissingVariables { missing });
        }
        Ok(Self::new(endpoint, project_id, api_key))
    }
}

// The API key is never printed.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("project_id", &self.project_id)
            .field("api_key", &"***")
            .finish()
    }
}
