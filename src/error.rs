//! Operation-level failure taxonomy.

use thiserror::Error;

use crate::keys::KeyError;
use crate::ports::store::StoreError;

/// Everything a recipe book operation can fail with.
///
/// No variant is fatal to the process; command handlers render the error
/// and the session (or the next invocation) carries on. Retrying is only
/// ever useful for [`BookError::StoreUnavailable`]; the rest report a
/// fact about the input or the data that a retry will not change.
#[derive(Debug, Error)]
pub enum BookError {
    /// The caller's input failed validation; never retried.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The referenced document does not exist.
    #[error("recipe {key:?} not found")]
    NotFound {
        /// Key that failed to resolve.
        key: String,
    },

    /// The document exists but belongs to a different user.
    #[error("recipe {key:?} belongs to another user")]
    Forbidden {
        /// Key of the foreign document.
        key: String,
    },

    /// Every candidate key was claimed by concurrent writers before we
    /// could take one, across all allocation rounds.
    #[error("could not claim a unique key for {slug:?} after {rounds} attempts")]
    ConcurrencyConflict {
        /// The base slug that kept colliding.
        slug: String,
        /// How many allocation rounds were tried.
        rounds: u32,
    },

    /// The store could not be reached; the whole operation may be retried.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// The recipe was deleted but some favorites could not be removed.
    ///
    /// An empty orphan list means the favorites could not even be
    /// enumerated; `ladle repair` cleans up either way.
    #[error("recipe {recipe:?} deleted, but its favorites were not all removed")]
    PartialCascade {
        /// Key of the deleted recipe.
        recipe: String,
        /// Favorite keys that still reference it, when known.
        orphans: Vec<String>,
    },
}

impl From<KeyError> for BookError {
    fn from(err: KeyError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<StoreError> for BookError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(msg) => Self::StoreUnavailable(msg),
        }
    }
}
