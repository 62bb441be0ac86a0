// plugin.rs — Plugin lifecycle wrapper.
//
// The hosting runtime drives start()/stop(); between the two it obtains the
// listener and registers it with its event dispatch mechanism.

use crate::client::HttpDataDogClient;
use crate::config::DataDogConfig;
use crate::error::DataDogConnectorError;
use crate::listener::DataDogEventListener;

/// DataDog event listener plugin.
///
/// Owns construction of the production listener: config plus an
/// [`HttpDataDogClient`] pointed at the configured API endpoint.
pub struct DataDogEventListenerPlugin {
    config: DataDogConfig,
}

impl DataDogEventListenerPlugin {
    /// Create the plugin from its configuration.
    pub fn new(config: DataDogConfig) -> Self {
        Self { config }
    }

    /// Lifecycle hook invoked by the hosting runtime on startup.
    pub fn start(&self) {
        tracing::info!("DataDogEventListenerPlugin.start()");
    }

    /// Lifecycle hook invoked by the hosting runtime on shutdown.
    pub fn stop(&self) {
        tracing::info!("DataDogEventListenerPlugin.stop()");
    }

    /// Build the production listener for registration with the host's
    /// dispatcher.
    pub fn listener(
        &self,
    ) -> Result<DataDogEventListener<HttpDataDogClient>, DataDogConnectorError> {
        let client = HttpDataDogClient::new(self.config.api_url.as_str())?;
        Ok(DataDogEventListener::new(self.config.clone(), client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use echo_events::EventListener;

    #[test]
    fn plugin_builds_a_production_listener() {
        let plugin = DataDogEventListenerPlugin::new(DataDogConfig::new("asdf"));

        let listener = plugin.listener().unwrap();

        // The listener is usable as a trait object for dispatcher registration.
        let _boxed: Box<dyn EventListener> = Box::new(listener);
    }
}
