// error.rs — Error types for the DataDog connector.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring the connector or sending an
/// event to DataDog.
#[derive(Debug, Error)]
pub enum DataDogConnectorError {
    /// Reading the config file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config file is not valid TOML or is missing required fields.
    #[error("config error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Serializing the event for the DataDog payload failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The HTTP transport itself failed (connect, TLS, timeout). A non-2xx
    /// response from DataDog is not this error; that is a delivery failure
    /// reported through [`SendOutcome`](crate::SendOutcome).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
