//! Recipe record, its creation draft, and its update patch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BookError;

/// A stored recipe document.
///
/// The key is not a field of the document; it travels separately, and
/// editing the title never changes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Display title the key was originally derived from.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Preparation time in minutes.
    pub prep_time: u32,
    /// Cooking time in minutes.
    pub cook_time: u32,
    /// How many servings the recipe yields.
    pub servings: u32,
    /// Ingredients in the order they are used.
    pub ingredients: Vec<String>,
    /// Preparation steps in order.
    pub instructions: Vec<String>,
    /// Free-form category, used for equality filtering.
    pub category: String,
    /// Tags, used for membership filtering.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Owner identity.
    pub user_id: String,
    /// Assigned at creation; never updated afterwards.
    pub created_at: DateTime<Utc>,
}

/// Caller input for creating a recipe: everything but the assigned parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    /// Title the key will be derived from.
    pub title: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Preparation time in minutes.
    #[serde(default)]
    pub prep_time: u32,
    /// Cooking time in minutes.
    #[serde(default)]
    pub cook_time: u32,
    /// How many servings the recipe yields.
    pub servings: u32,
    /// Ingredients in the order they are used.
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Preparation steps in order.
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Free-form category.
    pub category: String,
    /// Tags for filtering.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl RecipeDraft {
    /// Checks the draft before anything touches the store.
    ///
    /// Time fields are unsigned by type, so only servings and the title
    /// need a runtime check; the title's real test (does it slugify?) runs
    /// during key derivation.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::Validation`] describing the first bad field.
    pub fn validate(&self) -> Result<(), BookError> {
        if self.title.trim().is_empty() {
            return Err(BookError::Validation("title must not be empty".to_string()));
        }
        if self.servings == 0 {
            return Err(BookError::Validation("servings must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Completes the draft into a storable recipe.
    #[must_use]
    pub fn into_recipe(self, user_id: String, created_at: DateTime<Utc>) -> Recipe {
        Recipe {
            title: self.title,
            description: self.description,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            servings: self.servings,
            ingredients: self.ingredients,
            instructions: self.instructions,
            category: self.category,
            tags: self.tags,
            user_id,
            created_at,
        }
    }
}

/// Partial update for a recipe; unset fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipePatch {
    /// New title. Changing it does not change the key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New preparation time in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
    /// New cooking time in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<u32>,
    /// New servings count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    /// Replacement ingredient list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    /// Replacement instruction list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<String>>,
    /// New category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Replacement tag list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl RecipePatch {
    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Checks the patch's set fields.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::Validation`] for an empty title or zero servings.
    pub fn validate(&self) -> Result<(), BookError> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(BookError::Validation("title must not be empty".to_string()));
            }
        }
        if self.servings == Some(0) {
            return Err(BookError::Validation("servings must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Merges the set fields into `recipe`, leaving the rest untouched.
    pub fn apply(&self, recipe: &mut Recipe) {
        if let Some(title) = &self.title {
            recipe.title = title.clone();
        }
        if let Some(description) = &self.description {
            recipe.description = description.clone();
        }
        if let Some(prep_time) = self.prep_time {
            recipe.prep_time = prep_time;
        }
        if let Some(cook_time) = self.cook_time {
            recipe.cook_time = cook_time;
        }
        if let Some(servings) = self.servings {
            recipe.servings = servings;
        }
        if let Some(ingredients) = &self.ingredients {
            recipe.ingredients = ingredients.clone();
        }
        if let Some(instructions) = &self.instructions {
            recipe.instructions = instructions.clone();
        }
        if let Some(category) = &self.category {
            recipe.category = category.clone();
        }
        if let Some(tags) = &self.tags {
            recipe.tags = tags.clone();
        }
    }
}
