//! # echo-connector-datadog
//!
//! DataDog delivery adapter for Spinnaker events.
//!
//! Turns each Spinnaker lifecycle event into a DataDog event — title, the
//! full original event as freeform text, and a set of dimensional tags
//! derived from the event metadata and any pipeline/orchestration execution
//! in its content — and posts it to the DataDog events API.
//!
//! ## Flow
//!
//! 1. The host hands an event to [`DataDogEventListener::process_event`]
//! 2. [`normalizer::normalize`] derives the [`DataDogEvent`] payload
//! 3. The [`DataDogClient`] posts it to `/api/v1/events` — once, blocking
//! 4. A non-2xx response is logged at error level and swallowed; delivery is
//!    best-effort and never interrupts the host's event flow

pub mod client;
pub mod config;
pub mod error;
pub mod listener;
pub mod normalizer;
pub mod payload;
pub mod plugin;

pub use client::{DataDogClient, HttpDataDogClient, SendOutcome};
pub use config::DataDogConfig;
pub use error::DataDogConnectorError;
pub use listener::DataDogEventListener;
pub use payload::DataDogEvent;
pub use plugin::DataDogEventListenerPlugin;
