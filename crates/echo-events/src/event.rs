// event.rs — The Spinnaker event envelope.
//
// Every lifecycle event flowing through the bus is one Event: a Metadata
// block identifying who sent it and why, plus an untyped content map whose
// shape depends entirely on the emitting service. Listeners that care about
// a particular sub-structure (e.g. "execution") dig it out of `content`
// themselves.

use std::collections::HashMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A Spinnaker lifecycle event.
///
/// The wire format is fixed: downstream consumers serialize the whole
/// envelope verbatim (nulls included), so optional fields are emitted as
/// explicit `null` rather than omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Who sent this event and why. Always present.
    pub details: Metadata,

    /// Untyped event body. Keys and value shapes are owned by the emitting
    /// service; an empty map and an absent map are equivalent.
    #[serde(default)]
    pub content: HashMap<String, Value>,

    /// Raw upstream payload, when the emitting service forwards one.
    #[serde(rename = "rawContent", default)]
    pub raw_content: Option<Value>,

    /// Service-specific payload attachment.
    #[serde(default)]
    pub payload: Option<Value>,

    /// Bus-assigned event identifier.
    #[serde(rename = "eventId", default)]
    pub event_id: Option<String>,
}

/// Event metadata: origin service, event type, and owning application.
///
/// `source`, `event_type` and `application` are always present (possibly
/// empty); everything else is optional and serializes as `null` when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Emitting service, e.g. "orca".
    pub source: String,

    /// Event type string, e.g. "orca:pipeline:complete".
    #[serde(rename = "type")]
    pub event_type: String,

    /// Creation time as epoch milliseconds rendered to a string.
    #[serde(default)]
    pub created: Option<String>,

    #[serde(default)]
    pub organization: Option<String>,

    #[serde(default)]
    pub project: Option<String>,

    /// Spinnaker application the event belongs to.
    pub application: String,

    #[serde(rename = "_content_id", default)]
    pub content_id: Option<String>,

    /// Free-form key/value annotations attached by the emitter.
    #[serde(default)]
    pub attributes: Option<Value>,

    /// HTTP headers captured from the originating request, if any.
    #[serde(rename = "requestHeaders", default)]
    pub request_headers: Option<Value>,
}

impl Metadata {
    /// Create metadata for a freshly emitted event, stamped with the current
    /// time.
    pub fn new(
        source: impl Into<String>,
        event_type: impl Into<String>,
        application: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            event_type: event_type.into(),
            created: Some(Utc::now().timestamp_millis().to_string()),
            organization: None,
            project: None,
            application: application.into(),
            content_id: None,
            attributes: None,
            request_headers: None,
        }
    }
}

impl Event {
    /// Create an event with a fresh bus-assigned id and empty content.
    pub fn new(details: Metadata) -> Self {
        Self {
            details,
            content: HashMap::new(),
            raw_content: None,
            payload: None,
            event_id: Some(Uuid::new_v4().to_string()),
        }
    }

    /// Set the content map and return self (builder pattern).
    pub fn with_content(mut self, content: HashMap<String, Value>) -> Self {
        self.content = content;
        self
    }

    /// Set the payload attachment and return self.
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }
}
