//! The recipe book: every multi-document rule in one place.
//!
//! The store has no foreign keys and no cross-collection transactions, so
//! this layer enforces what the schema cannot: unique human-readable keys
//! for recipes, one favorite per (user, recipe) pair, and no favorite
//! outliving its recipe. All I/O goes through the ports on
//! [`ServiceContext`], so the same logic runs against the hosted store and
//! the in-memory one.

mod favorites;
mod repair;
mod retry;

pub use favorites::RecipeFilter;
pub use repair::RepairReport;
pub use retry::RetryPolicy;

use std::thread;

use crate::context::ServiceContext;
use crate::error::BookError;
use crate::keys;
use crate::model::{self, Recipe, RecipeDraft, RecipePatch};
use crate::ports::notifier::{RecipeEvent, RecipeSummary};
use crate::ports::store::{CreateOutcome, Fields, QueryFilter};

/// Collection holding recipe documents.
pub const RECIPES: &str = "recipes";
/// Collection holding favorite documents.
pub const FAVORITES: &str = "favorites";

/// Document field naming the favorited recipe.
const FIELD_RECIPE_ID: &str = "recipeId";
/// Document field naming the owning user.
const FIELD_USER_ID: &str = "userId";

/// How many numeric suffixes to probe before concluding something is wrong
/// with the collection rather than with our luck.
const MAX_SUFFIX_PROBES: u32 = 1_000;

/// Coordinates recipe and favorite mutations against the store.
pub struct RecipeBook<'a> {
    ctx: &'a ServiceContext,
    retry: RetryPolicy,
}

impl<'a> RecipeBook<'a> {
    /// Creates a book over the given context.
    #[must_use]
    pub const fn new(ctx: &'a ServiceContext, retry: RetryPolicy) -> Self {
        Self { ctx, retry }
    }

    const fn ctx(&self) -> &'a ServiceContext {
        self.ctx
    }

    /// Validates the draft, claims a unique key derived from its title,
    /// and writes the recipe stamped with the current time.
    ///
    /// # Errors
    ///
    /// [`BookError::Validation`] for bad input,
    /// [`BookError::ConcurrencyConflict`] when every allocation round loses
    /// the claim race, or [`BookError::StoreUnavailable`].
    pub fn create_recipe(&self, user_id: &str, draft: RecipeDraft) -> Result<String, BookError> {
        draft.validate()?;
        let slug = keys::slugify(&draft.title)?;
        let recipe = draft.into_recipe(user_id.to_string(), self.ctx.clock.now());
        let fields = model::to_fields(&recipe)?;

        let key = self.claim_key(&slug, &fields)?;
        tracing::info!(key = %key, user = %user_id, "recipe created");
        self.announce(RecipeEvent::Created, &key, &recipe.title, user_id);
        Ok(key)
    }

    /// Fetches one recipe by key.
    ///
    /// # Errors
    ///
    /// [`BookError::NotFound`] when the key is unoccupied, or
    /// [`BookError::StoreUnavailable`].
    pub fn recipe(&self, key: &str) -> Result<Recipe, BookError> {
        let fields = self
            .ctx
            .store
            .get(RECIPES, key)?
            .ok_or_else(|| BookError::NotFound { key: key.to_string() })?;
        model::from_fields(fields)
    }

    /// Merges the patch into the stored recipe. The key never changes,
    /// even when the title does.
    ///
    /// # Errors
    ///
    /// [`BookError::NotFound`] if the key is unoccupied,
    /// [`BookError::Forbidden`] if `user_id` is not the owner,
    /// [`BookError::Validation`] for a bad patch, or
    /// [`BookError::StoreUnavailable`].
    pub fn update_recipe(
        &self,
        key: &str,
        user_id: &str,
        patch: &RecipePatch,
    ) -> Result<(), BookError> {
        patch.validate()?;
        let mut recipe = self.owned_recipe(key, user_id)?;
        patch.apply(&mut recipe);
        let fields = model::to_fields(&recipe)?;
        self.ctx.store.set(RECIPES, key, &fields)?;

        tracing::info!(key = %key, user = %user_id, "recipe updated");
        self.announce(RecipeEvent::Updated, key, &recipe.title, user_id);
        Ok(())
    }

    /// Deletes the recipe, then cascades over its favorites.
    ///
    /// Phase 1 removes the recipe document; phase 2 enumerates and deletes
    /// every favorite referencing it. The two phases are not one
    /// transaction (the favorite count is unbounded, the store's batch
    /// scope is not), so a phase-2 failure leaves the recipe deleted and
    /// reports the stragglers instead of rolling back.
    ///
    /// # Errors
    ///
    /// [`BookError::NotFound`], [`BookError::Forbidden`],
    /// [`BookError::StoreUnavailable`] (phase 1 only), or
    /// [`BookError::PartialCascade`] naming the favorites left behind.
    pub fn delete_recipe(&self, key: &str, user_id: &str) -> Result<(), BookError> {
        let recipe = self.owned_recipe(key, user_id)?;

        self.ctx.store.delete(RECIPES, key)?;
        tracing::info!(key = %key, user = %user_id, "recipe deleted");
        self.announce(RecipeEvent::Deleted, key, &recipe.title, user_id);

        let filter = QueryFilter::default().eq(FIELD_RECIPE_ID, key);
        let favorites = match self.ctx.store.query(FAVORITES, &filter) {
            Ok(rows) => rows,
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "favorite enumeration failed after delete");
                return Err(BookError::PartialCascade {
                    recipe: key.to_string(),
                    orphans: Vec::new(),
                });
            }
        };

        let mut stragglers = Vec::new();
        for (favorite_key, _) in favorites {
            if let Err(err) = self.ctx.store.delete(FAVORITES, &favorite_key) {
                tracing::warn!(favorite = %favorite_key, error = %err, "cascade delete failed");
                stragglers.push(favorite_key);
            }
        }

        if stragglers.is_empty() {
            Ok(())
        } else {
            Err(BookError::PartialCascade { recipe: key.to_string(), orphans: stragglers })
        }
    }

    /// Loads a recipe and checks the caller owns it.
    fn owned_recipe(&self, key: &str, user_id: &str) -> Result<Recipe, BookError> {
        let recipe = self.recipe(key)?;
        if recipe.user_id != user_id {
            return Err(BookError::Forbidden { key: key.to_string() });
        }
        Ok(recipe)
    }

    /// Claims a free key for `slug`, retrying lost races with backoff.
    ///
    /// Each round probes for an unoccupied candidate (`slug`, `slug-2`, …)
    /// and then attempts a conditional create. The probe and the create are
    /// two separate round-trips, so a concurrent writer can take the
    /// candidate in between; that loss costs one round.
    fn claim_key(&self, slug: &str, fields: &Fields) -> Result<String, BookError> {
        for round in 0..self.retry.rounds {
            let candidate = self.free_candidate(slug)?;
            match self.ctx.store.create_if_absent(RECIPES, &candidate, fields)? {
                CreateOutcome::Created => return Ok(candidate),
                CreateOutcome::AlreadyExists => {
                    tracing::warn!(
                        candidate = %candidate,
                        round,
                        "key was claimed concurrently, retrying"
                    );
                    if round + 1 < self.retry.rounds {
                        thread::sleep(self.retry.delay_after(round));
                    }
                }
            }
        }
        Err(BookError::ConcurrencyConflict {
            slug: slug.to_string(),
            rounds: self.retry.rounds,
        })
    }

    /// Finds the first unoccupied candidate key for `slug`.
    fn free_candidate(&self, slug: &str) -> Result<String, BookError> {
        if self.ctx.store.get(RECIPES, slug)?.is_none() {
            return Ok(slug.to_string());
        }
        for n in 2..=MAX_SUFFIX_PROBES {
            let candidate = format!("{slug}{}{n}", keys::SEPARATOR);
            if self.ctx.store.get(RECIPES, &candidate)?.is_none() {
                return Ok(candidate);
            }
        }
        Err(BookError::ConcurrencyConflict {
            slug: slug.to_string(),
            rounds: self.retry.rounds,
        })
    }

    /// Fires a notification and logs instead of failing when it breaks.
    fn announce(&self, event: RecipeEvent, key: &str, title: &str, user_id: &str) {
        let summary = RecipeSummary {
            key: key.to_string(),
            title: title.to_string(),
            user_id: user_id.to_string(),
        };
        if let Err(err) = self.ctx.notifier.notify(event, &summary) {
            tracing::warn!(event = %event, key = %key, error = %err, "notification failed");
        }
    }
}
