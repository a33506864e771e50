//! In-memory document store.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::Value;

use crate::ports::store::{CreateOutcome, DocumentStore, Fields, QueryFilter, StoreError};

type Collections = BTreeMap<String, BTreeMap<String, Fields>>;

/// Document store backed by nested in-process maps.
///
/// Implements the same observable semantics as the hosted store: idempotent
/// deletes, conditional creates, and conjunctive equality/membership
/// queries. Used by the test suites and by `LADLE_STORE=memory` runs.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<Collections>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Collections> {
        // A panicked holder cannot leave a torn document: every write is a
        // single map insert/remove.
        self.collections.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DocumentStore for MemoryStore {
    fn get(&self, collection: &str, key: &str) -> Result<Option<Fields>, StoreError> {
        Ok(self.lock().get(collection).and_then(|docs| docs.get(key)).cloned())
    }

    fn set(&self, collection: &str, key: &str, fields: &Fields) -> Result<(), StoreError> {
        self.lock().entry(collection.to_string()).or_default().insert(key.to_string(), fields.clone());
        Ok(())
    }

    fn create_if_absent(
        &self,
        collection: &str,
        key: &str,
        fields: &Fields,
    ) -> Result<CreateOutcome, StoreError> {
        let mut collections = self.lock();
        let docs = collections.entry(collection.to_string()).or_default();
        if docs.contains_key(key) {
            return Ok(CreateOutcome::AlreadyExists);
        }
        docs.insert(key.to_string(), fields.clone());
        Ok(CreateOutcome::Created)
    }

    fn delete(&self, collection: &str, key: &str) -> Result<(), StoreError> {
        if let Some(docs) = self.lock().get_mut(collection) {
            docs.remove(key);
        }
        Ok(())
    }

    fn query(
        &self,
        collection: &str,
        filter: &QueryFilter,
    ) -> Result<Vec<(String, Fields)>, StoreError> {
        let collections = self.lock();
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };
        Ok(docs
            .iter()
            .filter(|(_, fields)| matches(fields, filter))
            .map(|(key, fields)| (key.clone(), fields.clone()))
            .collect())
    }
}

fn matches(fields: &Fields, filter: &QueryFilter) -> bool {
    let equals_hold = filter.equals.iter().all(|(field, want)| fields.get(field) == Some(want));
    let contains_hold = filter.contains.iter().all(|(field, want)| {
        matches!(fields.get(field), Some(Value::Array(items)) if items.contains(want))
    });
    equals_hold && contains_hold
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: serde_json::Value) -> Fields {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn get_missing_key_is_none() {
        let store = MemoryStore::new();
        assert!(store.get("recipes", "nothing").unwrap().is_none());
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = MemoryStore::new();
        let doc = fields(json!({"title": "Tacos"}));
        store.set("recipes", "tacos", &doc).unwrap();
        assert_eq!(store.get("recipes", "tacos").unwrap(), Some(doc));
    }

    #[test]
    fn set_overwrites() {
        let store = MemoryStore::new();
        store.set("recipes", "tacos", &fields(json!({"servings": 2}))).unwrap();
        store.set("recipes", "tacos", &fields(json!({"servings": 4}))).unwrap();
        let doc = store.get("recipes", "tacos").unwrap().unwrap();
        assert_eq!(doc["servings"], 4);
    }

    #[test]
    fn create_if_absent_reports_existing_without_overwriting() {
        let store = MemoryStore::new();
        store.set("recipes", "tacos", &fields(json!({"servings": 2}))).unwrap();

        let outcome =
            store.create_if_absent("recipes", "tacos", &fields(json!({"servings": 9}))).unwrap();

        assert_eq!(outcome, CreateOutcome::AlreadyExists);
        assert_eq!(store.get("recipes", "tacos").unwrap().unwrap()["servings"], 2);
    }

    #[test]
    fn create_if_absent_writes_new_keys() {
        let store = MemoryStore::new();
        let outcome =
            store.create_if_absent("recipes", "tacos", &fields(json!({"servings": 2}))).unwrap();
        assert_eq!(outcome, CreateOutcome::Created);
        assert!(store.get("recipes", "tacos").unwrap().is_some());
    }

    #[test]
    fn delete_is_idempotent() {
        let store = MemoryStore::new();
        store.set("recipes", "tacos", &fields(json!({}))).unwrap();
        store.delete("recipes", "tacos").unwrap();
        store.delete("recipes", "tacos").unwrap();
        assert!(store.get("recipes", "tacos").unwrap().is_none());
    }

    #[test]
    fn query_applies_equality_and_membership_conjunctively() {
        let store = MemoryStore::new();
        store
            .set(
                "recipes",
                "cookies",
                &fields(json!({"category": "Dessert", "tags": ["baking", "cookies"]})),
            )
            .unwrap();
        store
            .set("recipes", "pie", &fields(json!({"category": "Dessert", "tags": ["baking"]})))
            .unwrap();
        store
            .set("recipes", "pizza", &fields(json!({"category": "Main", "tags": ["italian"]})))
            .unwrap();

        let filter = QueryFilter::default().eq("category", "Dessert").contains("tags", "cookies");
        let rows = store.query("recipes", &filter).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, "cookies");
    }

    #[test]
    fn unfiltered_query_returns_whole_collection() {
        let store = MemoryStore::new();
        store.set("favorites", "fav-a-x", &fields(json!({}))).unwrap();
        store.set("favorites", "fav-b-y", &fields(json!({}))).unwrap();
        let rows = store.query("favorites", &QueryFilter::default()).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn query_on_missing_collection_is_empty() {
        let store = MemoryStore::new();
        assert!(store.query("recipes", &QueryFilter::default()).unwrap().is_empty());
    }

    #[test]
    fn membership_filter_ignores_non_array_fields() {
        let store = MemoryStore::new();
        store.set("recipes", "odd", &fields(json!({"tags": "not-an-array"}))).unwrap();
        let rows = store.query("recipes", &QueryFilter::default().contains("tags", "x")).unwrap();
        assert!(rows.is_empty());
    }
}
