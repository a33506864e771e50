//! End-to-end flows through the library against the in-memory adapters.

use std::sync::Arc;

use ladle::adapters::memory::{FixedClock, MemoryStore, SinkNotifier};
use ladle::book::{RecipeBook, RecipeFilter, RetryPolicy};
use ladle::context::ServiceContext;
use ladle::error::BookError;
use ladle::model::RecipeDraft;
use ladle::ports::store::{CreateOutcome, DocumentStore, Fields, QueryFilter, StoreError};

fn context() -> ServiceContext {
    ServiceContext {
        store: Box::new(MemoryStore::new()),
        notifier: Box::new(SinkNotifier::new()),
        clock: Box::new(FixedClock::for_tests()),
    }
}

fn draft(title: &str, category: &str, tags: &[&str]) -> RecipeDraft {
    RecipeDraft {
        title: title.to_string(),
        description: String::new(),
        prep_time: 10,
        cook_time: 20,
        servings: 4,
        ingredients: vec!["something".to_string()],
        instructions: vec!["cook it".to_string()],
        category: category.to_string(),
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
    }
}

#[test]
fn create_favorite_delete_leaves_no_trace() {
    let ctx = context();
    let book = RecipeBook::new(&ctx, RetryPolicy::immediate(3));

    let key = book
        .create_recipe("owner", draft("Chocolate Chip Cookies", "Dessert", &["baking"]))
        .unwrap();
    assert_eq!(key, "chocolate-chip-cookies");

    let favorite_key = book
        .add_favorite("alice", &key, Some("extra butter".to_string()))
        .unwrap();
    assert_eq!(favorite_key, "fav-alice-chocolate-chip-cookies");

    book.delete_recipe(&key, "owner").unwrap();

    assert!(ctx.store.get("recipes", &key).unwrap().is_none());
    assert!(ctx.store.get("favorites", &favorite_key).unwrap().is_none());
    assert!(book.favorites_with_recipes("alice").unwrap().is_empty());
}

#[test]
fn identical_titles_from_different_sessions_coexist() {
    let ctx = context();
    let book = RecipeBook::new(&ctx, RetryPolicy::immediate(3));

    let first = book.create_recipe("alice", draft("Tacos", "Main", &[])).unwrap();
    let second = book.create_recipe("bob", draft("Tacos!!", "Main", &[])).unwrap();

    assert_eq!(first, "tacos");
    assert_eq!(second, "tacos-2");

    let all = book.query_recipes(&RecipeFilter::default()).unwrap();
    assert_eq!(all.len(), 2);
}

#[test]
fn filters_compose_across_owner_category_and_tags() {
    let ctx = context();
    let book = RecipeBook::new(&ctx, RetryPolicy::immediate(3));

    book.create_recipe("alice", draft("Cookies", "Dessert", &["baking"])).unwrap();
    book.create_recipe("alice", draft("Pizza", "Main", &["italian"])).unwrap();
    book.create_recipe("bob", draft("Brownies", "Dessert", &["baking"])).unwrap();

    let filter = RecipeFilter {
        user_id: Some("alice".to_string()),
        category: Some("Dessert".to_string()),
        tags: vec!["baking".to_string()],
    };
    let rows = book.query_recipes(&filter).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].1.title, "Cookies");
}

/// Delegating view so two contexts can share one memory store.
struct Shared(Arc<MemoryStore>);

impl DocumentStore for Shared {
    fn get(&self, collection: &str, key: &str) -> Result<Option<Fields>, StoreError> {
        self.0.get(collection, key)
    }
    fn set(&self, collection: &str, key: &str, fields: &Fields) -> Result<(), StoreError> {
        self.0.set(collection, key, fields)
    }
    fn create_if_absent(
        &self,
        collection: &str,
        key: &str,
        fields: &Fields,
    ) -> Result<CreateOutcome, StoreError> {
        self.0.create_if_absent(collection, key, fields)
    }
    fn delete(&self, collection: &str, key: &str) -> Result<(), StoreError> {
        self.0.delete(collection, key)
    }
    fn query(
        &self,
        collection: &str,
        filter: &QueryFilter,
    ) -> Result<Vec<(String, Fields)>, StoreError> {
        self.0.query(collection, filter)
    }
}

/// Same store, but favorite deletes fail, mimicking an outage between the
/// two cascade phases.
struct FavoriteDeletesDown(Arc<MemoryStore>);

impl DocumentStore for FavoriteDeletesDown {
    fn get(&self, collection: &str, key: &str) -> Result<Option<Fields>, StoreError> {
        self.0.get(collection, key)
    }
    fn set(&self, collection: &str, key: &str, fields: &Fields) -> Result<(), StoreError> {
        self.0.set(collection, key, fields)
    }
    fn create_if_absent(
        &self,
        collection: &str,
        key: &str,
        fields: &Fields,
    ) -> Result<CreateOutcome, StoreError> {
        self.0.create_if_absent(collection, key, fields)
    }
    fn delete(&self, collection: &str, key: &str) -> Result<(), StoreError> {
        if collection == "favorites" {
            return Err(StoreError::Unavailable("favorites shard offline".to_string()));
        }
        self.0.delete(collection, key)
    }
    fn query(
        &self,
        collection: &str,
        filter: &QueryFilter,
    ) -> Result<Vec<(String, Fields)>, StoreError> {
        self.0.query(collection, filter)
    }
}

#[test]
fn interrupted_cascade_is_reported_and_repairable() {
    let shared = Arc::new(MemoryStore::new());

    let healthy = ServiceContext {
        store: Box::new(Shared(Arc::clone(&shared))),
        notifier: Box::new(SinkNotifier::new()),
        clock: Box::new(FixedClock::for_tests()),
    };
    let degraded = ServiceContext {
        store: Box::new(FavoriteDeletesDown(Arc::clone(&shared))),
        notifier: Box::new(SinkNotifier::new()),
        clock: Box::new(FixedClock::for_tests()),
    };

    let book = RecipeBook::new(&healthy, RetryPolicy::immediate(3));
    book.create_recipe("owner", draft("Tacos", "Main", &[])).unwrap();
    book.add_favorite("alice", "tacos", None).unwrap();
    book.add_favorite("bob", "tacos", None).unwrap();

    // Phase 1 succeeds, phase 2 cannot delete a single favorite.
    let degraded_book = RecipeBook::new(&degraded, RetryPolicy::immediate(3));
    let err = degraded_book.delete_recipe("tacos", "owner").unwrap_err();

    let BookError::PartialCascade { recipe, mut orphans } = err else {
        panic!("expected a partial cascade");
    };
    assert_eq!(recipe, "tacos");
    orphans.sort();
    assert_eq!(orphans, vec!["fav-alice-tacos", "fav-bob-tacos"]);

    // The recipe is gone; the orphans linger exactly as reported.
    assert!(shared.get("recipes", "tacos").unwrap().is_none());
    assert!(shared.get("favorites", "fav-alice-tacos").unwrap().is_some());

    // The read side already hides them from users.
    assert!(book.favorites_with_recipes("alice").unwrap().is_empty());

    // Once the store recovers, a repair pass finishes the cleanup.
    let report = book.repair_favorites().unwrap();
    let mut removed = report.removed.clone();
    removed.sort();
    assert_eq!(removed, vec!["fav-alice-tacos", "fav-bob-tacos"]);
    assert!(report.failed.is_empty());
    assert!(shared.get("favorites", "fav-bob-tacos").unwrap().is_none());
}

#[test]
fn refavoriting_after_recreation_works() {
    let ctx = context();
    let book = RecipeBook::new(&ctx, RetryPolicy::immediate(3));

    let key = book.create_recipe("owner", draft("Pie", "Dessert", &[])).unwrap();
    book.add_favorite("alice", &key, None).unwrap();
    book.delete_recipe(&key, "owner").unwrap();

    // Same title lands on the same key now that it is free again.
    let again = book.create_recipe("owner", draft("Pie", "Dessert", &[])).unwrap();
    assert_eq!(again, key);

    book.add_favorite("alice", &again, Some("better than ever".to_string())).unwrap();
    let favorites = book.favorites_with_recipes("alice").unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].0.notes.as_deref(), Some("better than ever"));
}
