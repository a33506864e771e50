//! Live adapter for the `Notifier` port: webhook delivery.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use crate::ports::notifier::{Notifier, RecipeEvent, RecipeSummary};

/// Notifier that POSTs each event to a configured webhook.
///
/// Delivery is one attempt, no retries: the contract is fire-and-forget,
/// and the caller logs whatever comes back.
pub struct WebhookNotifier {
    runtime: tokio::runtime::Runtime,
    client: Client,
    url: String,
}

/// JSON body delivered to the webhook.
#[derive(Serialize)]
struct EventPayload<'a> {
    event: &'a str,
    recipe: &'a RecipeSummary,
}

impl WebhookNotifier {
    /// Builds a notifier delivering to `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or its runtime cannot be built.
    pub fn connect(
        url: &str,
        timeout: Duration,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let client = Client::builder().timeout(timeout).build()?;
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        Ok(Self { runtime, client, url: url.to_string() })
    }
}

impl Notifier for WebhookNotifier {
    fn notify(
        &self,
        event: RecipeEvent,
        summary: &RecipeSummary,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let payload = EventPayload { event: event.as_str(), recipe: summary };
        let response =
            self.runtime.block_on(self.client.post(&self.url).json(&payload).send())?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(format!("webhook answered HTTP {status}").into())
        }
    }
}

/// Notifier used when no webhook is configured; accepts everything.
pub struct DisabledNotifier;

impl Notifier for DisabledNotifier {
    fn notify(
        &self,
        _event: RecipeEvent,
        _summary: &RecipeSummary,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_notifier_accepts_events() {
        let summary = RecipeSummary {
            key: "tacos".to_string(),
            title: "Tacos".to_string(),
            user_id: "alice".to_string(),
        };
        assert!(DisabledNotifier.notify(RecipeEvent::Created, &summary).is_ok());
    }

    #[test]
    fn payload_carries_event_label_and_summary() {
        let summary = RecipeSummary {
            key: "tacos".to_string(),
            title: "Tacos".to_string(),
            user_id: "alice".to_string(),
        };
        let payload = EventPayload { event: RecipeEvent::Updated.as_str(), recipe: &summary };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["event"], "updated");
        assert_eq!(json["recipe"]["key"], "tacos");
    }
}
