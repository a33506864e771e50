//! Orphan reconciliation: the maintenance pass behind `ladle repair`.

use crate::book::{FAVORITES, RECIPES, RecipeBook};
use crate::error::BookError;
use crate::model::{self, Favorite};
use crate::ports::store::QueryFilter;

/// What a repair pass found and did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepairReport {
    /// Favorites examined.
    pub scanned: usize,
    /// Favorites whose recipe still exists.
    pub kept: usize,
    /// Orphaned favorite keys that were deleted.
    pub removed: Vec<String>,
    /// Orphaned favorite keys whose deletion failed; run repair again.
    pub failed: Vec<String>,
}

impl RepairReport {
    /// Returns `true` when nothing was orphaned or left behind.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.removed.is_empty() && self.failed.is_empty()
    }
}

impl RecipeBook<'_> {
    /// Scans every favorite and deletes the ones whose recipe is gone.
    ///
    /// Complements the cascade in `delete_recipe`: whatever an interrupted
    /// phase 2 left behind, this pass removes. Individual failures are
    /// collected rather than aborting the scan, so one bad document cannot
    /// shield the rest.
    ///
    /// # Errors
    ///
    /// [`BookError::StoreUnavailable`] when the favorites collection
    /// cannot be enumerated at all.
    pub fn repair_favorites(&self) -> Result<RepairReport, BookError> {
        let rows = self.ctx().store.query(FAVORITES, &QueryFilter::default())?;

        let mut report = RepairReport { scanned: rows.len(), ..RepairReport::default() };
        for (favorite_key, fields) in rows {
            let favorite: Favorite = match model::from_fields(fields) {
                Ok(favorite) => favorite,
                Err(err) => {
                    // Undecodable favorites are left alone; deleting data
                    // we cannot interpret is worse than reporting it.
                    tracing::warn!(favorite = %favorite_key, error = %err, "unreadable favorite");
                    report.failed.push(favorite_key);
                    continue;
                }
            };

            match self.ctx().store.get(RECIPES, &favorite.recipe_id)? {
                Some(_) => report.kept += 1,
                None => match self.ctx().store.delete(FAVORITES, &favorite_key) {
                    Ok(()) => {
                        tracing::info!(favorite = %favorite_key, "orphaned favorite removed");
                        report.removed.push(favorite_key);
                    }
                    Err(err) => {
                        tracing::warn!(favorite = %favorite_key, error = %err, "orphan delete failed");
                        report.failed.push(favorite_key);
                    }
                },
            }
        }
        Ok(report)
    }
}
