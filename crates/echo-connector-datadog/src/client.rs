// client.rs — Transport to the DataDog events API.
//
// The listener only depends on the DataDogClient trait; production wires in
// HttpDataDogClient, tests wire in a stub. One send per event, blocking, no
// retry — delivery guarantees beyond that belong to an outer layer.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::error::DataDogConnectorError;
use crate::payload::DataDogEvent;

/// Path of the DataDog events endpoint, relative to the API base URL.
pub const EVENTS_PATH: &str = "api/v1/events";

/// Result of one delivery attempt that reached DataDog.
///
/// A transport that could not complete the HTTP exchange at all returns an
/// `Err` from [`DataDogClient::send_event`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendOutcome {
    /// HTTP status code of the response.
    pub status: u16,

    /// Response status message, when the transport has one (for HTTP, the
    /// reason phrase).
    pub message: Option<String>,
}

impl SendOutcome {
    /// Whether DataDog accepted the event (any 2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Delivery capability the listener depends on.
pub trait DataDogClient: Send + Sync {
    /// Post one event, authenticated by `api_key`. Returns the outcome of
    /// the exchange; errors are reserved for failures of the transport
    /// itself.
    fn send_event(
        &self,
        api_key: &str,
        event: &DataDogEvent,
    ) -> Result<SendOutcome, DataDogConnectorError>;
}

/// Production transport: JSON POST to `{api_url}/api/v1/events?api_key=…`.
pub struct HttpDataDogClient {
    http: Client,
    api_url: String,
}

impl HttpDataDogClient {
    /// Build a client for the given API base URL.
    pub fn new(api_url: impl Into<String>) -> Result<Self, DataDogConnectorError> {
        Ok(Self {
            http: Client::builder().build()?,
            api_url: api_url.into(),
        })
    }
}

impl DataDogClient for HttpDataDogClient {
    fn send_event(
        &self,
        api_key: &str,
        event: &DataDogEvent,
    ) -> Result<SendOutcome, DataDogConnectorError> {
        let url = events_url(&self.api_url, api_key);
        let response = self.http.post(url).json(event).send()?;
        let status = response.status();
        Ok(SendOutcome {
            status: status.as_u16(),
            message: status.canonical_reason().map(str::to_string),
        })
    }
}

/// Full events-endpoint URL with the API key as a query parameter.
fn events_url(api_url: &str, api_key: &str) -> String {
    format!(
        "{}/{}?api_key={}",
        api_url.trim_end_matches('/'),
        EVENTS_PATH,
        api_key
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_url_joins_base_path_and_key() {
        assert_eq!(
            events_url("https://api.datadoghq.com", "asdf"),
            "https://api.datadoghq.com/api/v1/events?api_key=asdf"
        );
    }

    #[test]
    fn events_url_tolerates_trailing_slash() {
        assert_eq!(
            events_url("https://api.datadoghq.com/", "asdf"),
            "https://api.datadoghq.com/api/v1/events?api_key=asdf"
        );
    }

    #[test]
    fn outcome_success_is_any_2xx() {
        let ok = |status| SendOutcome {
            status,
            message: None,
        };
        assert!(ok(200).is_success());
        assert!(ok(202).is_success());
        assert!(!ok(199).is_success());
        assert!(!ok(302).is_success());
        assert!(!ok(400).is_success());
        assert!(!ok(500).is_success());
    }
}
