//! Typed records for the two collections.
//!
//! The store speaks loose JSON field maps; these types pin the schema at
//! the application boundary. Wire names are camelCase to match the
//! documents as the hosted database stores them.

mod favorite;
mod recipe;

pub use favorite::Favorite;
pub use recipe::{Recipe, RecipeDraft, RecipePatch};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::BookError;
use crate::ports::store::Fields;

/// Serializes a record into a store field map.
///
/// # Errors
///
/// Returns [`BookError::Validation`] when the value does not encode to a
/// JSON object; record types always do, so this guards against misuse.
pub fn to_fields<T: Serialize>(value: &T) -> Result<Fields, BookError> {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::Object(map)) => Ok(map),
        Ok(other) => Err(BookError::Validation(format!(
            "document must be an object, got {other}"
        ))),
        Err(err) => Err(BookError::Validation(format!("unencodable document: {err}"))),
    }
}

/// Decodes a store field map into a record.
///
/// # Errors
///
/// Returns [`BookError::StoreUnavailable`] when the stored document does
/// not match the expected schema; the data, not the caller, is at fault.
pub fn from_fields<T: DeserializeOwned>(fields: Fields) -> Result<T, BookError> {
    serde_json::from_value(serde_json::Value::Object(fields))
        .map_err(|err| BookError::StoreUnavailable(format!("malformed document: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn recipe_round_trips_through_fields() {
        let recipe = Recipe {
            title: "Homemade Pizza".to_string(),
            description: "From scratch".to_string(),
            prep_time: 20,
            cook_time: 15,
            servings: 4,
            ingredients: vec!["dough".to_string(), "tomato sauce".to_string()],
            instructions: vec!["Roll out dough".to_string(), "Bake at 450F".to_string()],
            category: "Main Course".to_string(),
            tags: vec!["italian".to_string()],
            user_id: "alice".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        };

        let fields = to_fields(&recipe).unwrap();
        assert!(fields.contains_key("prepTime"), "wire names are camelCase");
        assert!(fields.contains_key("userId"));

        let back: Recipe = from_fields(fields).unwrap();
        assert_eq!(back, recipe);
    }

    #[test]
    fn malformed_fields_are_a_store_fault() {
        let mut fields = Fields::new();
        fields.insert("title".to_string(), serde_json::Value::Bool(true));
        let result: Result<Recipe, _> = from_fields(fields);
        assert!(matches!(result, Err(BookError::StoreUnavailable(_))));
    }
}
