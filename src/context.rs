//! Service context bundling all port trait objects.

use crate::adapters::live::{DisabledNotifier, HttpStore, SystemClock, WebhookNotifier};
use crate::adapters::memory::{MemoryStore, SinkNotifier};
use crate::config::{Config, StoreKind};
use crate::ports::clock::Clock;
use crate::ports::notifier::Notifier;
use crate::ports::store::{DocumentStore, StoreError};

/// Bundles the port trait objects into a single handle.
///
/// Acquired once at process start and threaded through every operation;
/// constructors wire up the adapter set the configuration asks for.
pub struct ServiceContext {
    /// Document persistence.
    pub store: Box<dyn DocumentStore>,
    /// Mutation event delivery.
    pub notifier: Box<dyn Notifier>,
    /// Time source for assigned timestamps.
    pub clock: Box<dyn Clock>,
}

impl ServiceContext {
    /// Builds the context the configuration selects.
    ///
    /// # Errors
    ///
    /// Returns an error if a live adapter cannot be constructed.
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        match config.store {
            StoreKind::Http => Self::live(config),
            StoreKind::Memory => Ok(Self::memory()),
        }
    }

    /// Live context: HTTP store, webhook notifier when configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client setup fails or the store URL is
    /// missing from the configuration.
    pub fn live(config: &Config) -> Result<Self, StoreError> {
        let url = config
            .store_url
            .as_deref()
            .ok_or_else(|| StoreError::Unavailable("no store URL configured".to_string()))?;
        let store = HttpStore::connect(url, config.api_key.clone(), config.request_timeout)?;

        let notifier: Box<dyn Notifier> = match &config.notify_url {
            Some(notify_url) => Box::new(
                WebhookNotifier::connect(notify_url, config.request_timeout)
                    .map_err(|e| StoreError::Unavailable(e.to_string()))?,
            ),
            None => Box::new(DisabledNotifier),
        };

        Ok(Self { store: Box::new(store), notifier, clock: Box::new(SystemClock) })
    }

    /// In-process context: memory store, recording notifier, system clock.
    #[must_use]
    pub fn memory() -> Self {
        Self {
            store: Box::new(MemoryStore::new()),
            notifier: Box::new(SinkNotifier::new()),
            clock: Box::new(SystemClock),
        }
    }
}
