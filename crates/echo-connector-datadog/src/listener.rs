// listener.rs — The DataDog event listener.

use echo_events::{Event, EventListener, ListenerError};

use crate::client::DataDogClient;
use crate::config::DataDogConfig;
use crate::normalizer;

/// Event listener that forwards every Spinnaker event to DataDog.
///
/// Generic over `C: DataDogClient` so tests can substitute a stub transport
/// without touching the dispatch logic. Holds no per-event state; one
/// instance may serve concurrent `process_event` calls.
pub struct DataDogEventListener<C: DataDogClient> {
    config: DataDogConfig,
    client: C,
}

impl<C: DataDogClient> DataDogEventListener<C> {
    /// Create a listener over the given transport.
    pub fn new(config: DataDogConfig, client: C) -> Self {
        Self { config, client }
    }
}

impl<C: DataDogClient> EventListener for DataDogEventListener<C> {
    /// Normalize the event and post it to DataDog, exactly once.
    ///
    /// A rejected delivery (non-2xx outcome) is logged and swallowed:
    /// notification is best-effort and must never interrupt the host's event
    /// flow. Normalization and transport errors propagate to the dispatcher.
    fn process_event(&self, event: &Event) -> Result<(), ListenerError> {
        let payload = normalizer::normalize(event)?;
        let outcome = self.client.send_event(&self.config.api_key, &payload)?;
        if !outcome.is_success() {
            tracing::error!(
                "DataDog event listener failed with response: {} - {}",
                outcome.status,
                outcome.message.as_deref().unwrap_or_default()
            );
        }
        Ok(())
    }
}
