// config.rs — Connector configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DataDogConnectorError;

/// DataDog connector configuration, loadable from a TOML file:
///
/// ```toml
/// api_key = "..."
/// # api_url = "https://api.datadoghq.com"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataDogConfig {
    /// DataDog API key, sent as the `api_key` query parameter.
    pub api_key: String,

    /// Base URL of the DataDog API. Override for EU/gov sites or tests.
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    "https://api.datadoghq.com".to_string()
}

impl DataDogConfig {
    /// Create a config with the default API endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: default_api_url(),
        }
    }

    /// Load the config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, DataDogConnectorError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| DataDogConnectorError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}
