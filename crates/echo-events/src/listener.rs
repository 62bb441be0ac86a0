// listener.rs — Listener trait and event dispatch.
//
// Delivery adapters (DataDog, log files, webhooks) subscribe to the bus by
// implementing EventListener. The dispatcher is synchronous: one event in,
// every listener called once, in registration order.

use crate::event::Event;

/// Error type listeners surface to the dispatcher.
///
/// Adapters keep their own concrete error enums; boxing at this seam lets
/// the dispatcher treat them uniformly.
pub type ListenerError = Box<dyn std::error::Error + Send + Sync>;

/// Trait for receiving Spinnaker events.
///
/// Implementations decide what to do with each event: forward it to a
/// monitoring backend, append it to a file, call a webhook, etc. A listener
/// that recovers from a failure internally (e.g. by logging it) returns
/// `Ok(())`; an error return means this event could not be processed at all.
pub trait EventListener: Send {
    /// Handle one event. Each call is independent; listeners hold no
    /// per-event state across invocations.
    fn process_event(&self, event: &Event) -> Result<(), ListenerError>;
}

/// Dispatches events to multiple listeners.
///
/// Errors from individual listeners are logged but don't prevent other
/// listeners from receiving the event.
pub struct EventDispatcher {
    listeners: Vec<Box<dyn EventListener>>,
}

impl EventDispatcher {
    /// Create a new dispatcher with no listeners.
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Register a listener.
    pub fn add_listener(&mut self, listener: Box<dyn EventListener>) {
        self.listeners.push(listener);
    }

    /// Dispatch an event to all listeners.
    pub fn dispatch(&self, event: &Event) {
        for listener in &self.listeners {
            if let Err(e) = listener.process_event(event) {
                tracing::warn!("event listener error: {}", e);
            }
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
