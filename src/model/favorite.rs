//! Favorite record: one document per (user, recipe) pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored favorite document.
///
/// The document key is the composite `fav-{userId}-{recipeId}`, so the
/// pair fields are also embedded here for querying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    /// Key of the favorited recipe.
    pub recipe_id: String,
    /// User who favorited it.
    pub user_id: String,
    /// Optional free-text note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// When the favorite was (last) added; an idempotent re-add refreshes it.
    pub added_date: DateTime<Utc>,
}
