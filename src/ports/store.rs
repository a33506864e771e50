//! Document store port: the boundary to the hosted database.

use serde_json::{Map, Value};
use thiserror::Error;

/// The field map of a single stored document.
pub type Fields = Map<String, Value>;

/// Failure reported by a store adapter.
///
/// Anything the caller cannot fix by changing its input lands here:
/// timeouts, connection failures, and responses the adapter cannot
/// interpret.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached, timed out, or answered with
    /// something the adapter could not make sense of.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Outcome of a conditional create.
///
/// An existing document is an expected answer during key allocation, not a
/// failure, so it is reported as a value rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The document was written under the requested key.
    Created,
    /// A document already holds the requested key; nothing was written.
    AlreadyExists,
}

/// Filters for a query, combined conjunctively.
#[derive(Debug, Clone, Default)]
pub struct QueryFilter {
    /// Field/value pairs a matching document must carry verbatim.
    pub equals: Vec<(String, Value)>,
    /// Field/value pairs where the field is an array containing the value.
    pub contains: Vec<(String, Value)>,
}

impl QueryFilter {
    /// Adds an equality condition.
    #[must_use]
    pub fn eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.equals.push((field.to_string(), value.into()));
        self
    }

    /// Adds an array-membership condition.
    #[must_use]
    pub fn contains(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.contains.push((field.to_string(), value.into()));
        self
    }

    /// Returns `true` when no conditions are set (the query matches everything).
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.equals.is_empty() && self.contains.is_empty()
    }
}

/// Key/value document persistence with simple equality and membership queries.
///
/// Abstracting the store lets the same application logic run against the
/// hosted database and an in-process map during tests.
pub trait DocumentStore: Send + Sync {
    /// Fetches a document by key. `None` means the key is unoccupied.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached.
    fn get(&self, collection: &str, key: &str) -> Result<Option<Fields>, StoreError>;

    /// Creates or overwrites the document under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached.
    fn set(&self, collection: &str, key: &str, fields: &Fields) -> Result<(), StoreError>;

    /// Writes the document only if `key` is unoccupied.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached; an occupied key is
    /// reported through [`CreateOutcome`], not as an error.
    fn create_if_absent(
        &self,
        collection: &str,
        key: &str,
        fields: &Fields,
    ) -> Result<CreateOutcome, StoreError>;

    /// Deletes the document under `key`. Deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached.
    fn delete(&self, collection: &str, key: &str) -> Result<(), StoreError>;

    /// Returns all documents matching every condition in `filter`, as
    /// `(key, fields)` pairs in whatever order the store produces them.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached.
    fn query(
        &self,
        collection: &str,
        filter: &QueryFilter,
    ) -> Result<Vec<(String, Fields)>, StoreError>;
}
