//! Favorite operations: the many-to-many edge between users and recipes.

use crate::book::{FAVORITES, FIELD_USER_ID, RECIPES, RecipeBook};
use crate::error::BookError;
use crate::keys;
use crate::model::{self, Favorite, Recipe};
use crate::ports::store::QueryFilter;

/// Conjunctive filters for browsing recipes.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    /// Only recipes owned by this user.
    pub user_id: Option<String>,
    /// Only recipes in this category.
    pub category: Option<String>,
    /// Only recipes carrying every one of these tags.
    pub tags: Vec<String>,
}

impl RecipeBook<'_> {
    /// Marks a recipe as a favorite of `user_id`.
    ///
    /// The composite key makes this an upsert: favoriting the same recipe
    /// twice refreshes the one document instead of duplicating it. The
    /// recipe must exist at the time of the check; the check and the write
    /// are separate round-trips, so a concurrent recipe deletion can still
    /// slip an orphan in; the read side and `repair` both tolerate that.
    ///
    /// # Errors
    ///
    /// [`BookError::NotFound`] when the recipe does not exist,
    /// [`BookError::Validation`] for unusable key components, or
    /// [`BookError::StoreUnavailable`].
    pub fn add_favorite(
        &self,
        user_id: &str,
        recipe_key: &str,
        notes: Option<String>,
    ) -> Result<String, BookError> {
        let key = keys::favorite_key(user_id, recipe_key)?;
        if self.ctx().store.get(RECIPES, recipe_key)?.is_none() {
            return Err(BookError::NotFound { key: recipe_key.to_string() });
        }

        let favorite = Favorite {
            recipe_id: recipe_key.to_string(),
            user_id: user_id.to_string(),
            notes,
            added_date: self.ctx().clock.now(),
        };
        let fields = model::to_fields(&favorite)?;
        self.ctx().store.set(FAVORITES, &key, &fields)?;

        tracing::info!(favorite = %key, "favorite added");
        Ok(key)
    }

    /// Removes `user_id`'s favorite of the recipe, if any.
    ///
    /// Removing a favorite that was never added succeeds; the end state is
    /// identical.
    ///
    /// # Errors
    ///
    /// [`BookError::Validation`] for unusable key components, or
    /// [`BookError::StoreUnavailable`].
    pub fn remove_favorite(&self, user_id: &str, recipe_key: &str) -> Result<(), BookError> {
        let key = keys::favorite_key(user_id, recipe_key)?;
        self.ctx().store.delete(FAVORITES, &key)?;
        tracing::info!(favorite = %key, "favorite removed");
        Ok(())
    }

    /// Returns the user's favorites joined with their recipes.
    ///
    /// A favorite whose recipe no longer resolves is dropped from the
    /// result and logged, as the read-side guard against orphans left by
    /// an interrupted cascade.
    ///
    /// # Errors
    ///
    /// [`BookError::StoreUnavailable`].
    pub fn favorites_with_recipes(
        &self,
        user_id: &str,
    ) -> Result<Vec<(Favorite, Recipe)>, BookError> {
        let filter = QueryFilter::default().eq(FIELD_USER_ID, user_id);
        let rows = self.ctx().store.query(FAVORITES, &filter)?;

        let mut joined = Vec::with_capacity(rows.len());
        for (favorite_key, fields) in rows {
            let favorite: Favorite = model::from_fields(fields)?;
            match self.ctx().store.get(RECIPES, &favorite.recipe_id)? {
                Some(recipe_fields) => {
                    joined.push((favorite, model::from_fields(recipe_fields)?));
                }
                None => {
                    tracing::warn!(
                        favorite = %favorite_key,
                        recipe = %favorite.recipe_id,
                        "favorite references a missing recipe, skipping"
                    );
                }
            }
        }
        Ok(joined)
    }

    /// Returns `(key, recipe)` pairs matching every condition in `filter`,
    /// in whatever order the store produces them.
    ///
    /// # Errors
    ///
    /// [`BookError::StoreUnavailable`].
    pub fn query_recipes(
        &self,
        filter: &RecipeFilter,
    ) -> Result<Vec<(String, Recipe)>, BookError> {
        let mut query = QueryFilter::default();
        if let Some(user_id) = &filter.user_id {
            query = query.eq(FIELD_USER_ID, user_id.as_str());
        }
        if let Some(category) = &filter.category {
            query = query.eq("category", category.as_str());
        }
        for tag in &filter.tags {
            query = query.contains("tags", tag.as_str());
        }

        let rows = self.ctx().store.query(RECIPES, &query)?;
        rows.into_iter()
            .map(|(key, fields)| Ok((key, model::from_fields(fields)?)))
            .collect()
    }
}
