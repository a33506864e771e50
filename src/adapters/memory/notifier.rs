//! Recording notifier for tests and storeless runs.

use std::sync::{Mutex, PoisonError};

use crate::ports::notifier::{Notifier, RecipeEvent, RecipeSummary};

/// Notifier that keeps every event in memory instead of delivering it.
#[derive(Default)]
pub struct SinkNotifier {
    events: Mutex<Vec<(RecipeEvent, RecipeSummary)>>,
}

impl SinkNotifier {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything notified so far, in order.
    #[must_use]
    pub fn events(&self) -> Vec<(RecipeEvent, RecipeSummary)> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Notifier for SinkNotifier {
    fn notify(
        &self,
        event: RecipeEvent,
        summary: &RecipeSummary,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).push((event, summary.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_events_in_order() {
        let sink = SinkNotifier::new();
        let summary = RecipeSummary {
            key: "tacos".to_string(),
            title: "Tacos".to_string(),
            user_id: "alice".to_string(),
        };

        sink.notify(RecipeEvent::Created, &summary).unwrap();
        sink.notify(RecipeEvent::Deleted, &summary).unwrap();

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, RecipeEvent::Created);
        assert_eq!(events[1].0, RecipeEvent::Deleted);
        assert_eq!(events[1].1.key, "tacos");
    }
}
