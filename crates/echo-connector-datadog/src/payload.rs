// payload.rs — The DataDog event wire payload.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Title of every event posted by this connector.
pub const EVENT_TITLE: &str = "Spinnaker Event";

/// Priority of every event posted by this connector.
pub const EVENT_PRIORITY: &str = "normal";

/// Alert classification of every event posted by this connector.
pub const EVENT_ALERT_TYPE: &str = "info";

/// JSON body of a POST to the DataDog events API.
///
/// `text` carries the entire original Spinnaker event serialized to JSON, so
/// operators can inspect the raw event from the DataDog event stream. `tags`
/// is a set: deduplicated, order not significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataDogEvent {
    pub title: String,
    pub text: String,
    pub priority: String,
    pub tags: BTreeSet<String>,
    pub alert_type: String,
}
