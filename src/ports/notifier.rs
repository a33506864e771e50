//! Notification port for announcing recipe mutations.

use std::fmt;

use serde::Serialize;

/// Mutation kinds reported to the notification channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeEvent {
    /// A recipe was created.
    Created,
    /// A recipe's fields were changed.
    Updated,
    /// A recipe (and its favorites) was deleted.
    Deleted,
}

impl RecipeEvent {
    /// The wire label for this event kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        }
    }
}

impl fmt::Display for RecipeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The slice of a recipe that accompanies a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeSummary {
    /// Key of the recipe the event is about.
    pub key: String,
    /// Recipe title at the time of the event.
    pub title: String,
    /// User who performed the mutation.
    pub user_id: String,
}

/// Fire-and-forget delivery of mutation events.
///
/// Callers invoke this after a successful mutation and must swallow any
/// failure it reports; a broken notification channel never fails the
/// operation that triggered it.
pub trait Notifier: Send + Sync {
    /// Delivers one event.
    ///
    /// # Errors
    ///
    /// Returns an error if delivery fails; callers log and continue.
    fn notify(
        &self,
        event: RecipeEvent,
        summary: &RecipeSummary,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

#[cfg(test)]
mod tests {
    use super::RecipeEvent;

    #[test]
    fn event_labels_are_stable() {
        assert_eq!(RecipeEvent::Created.as_str(), "created");
        assert_eq!(RecipeEvent::Updated.as_str(), "updated");
        assert_eq!(RecipeEvent::Deleted.as_str(), "deleted");
    }
}
