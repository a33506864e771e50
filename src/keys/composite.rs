//! Composite keys for the favorites relation.

use super::{KeyError, SEPARATOR};

/// Prefix marking a favorite document key.
const PREFIX: &str = "fav";

/// Builds the natural key of a favorite: `fav-{user_id}-{recipe_id}`.
///
/// One document per (user, recipe) pair falls out of the key itself: a
/// second add for the same pair lands on the same key and overwrites.
///
/// The recipe id occupies the tail of the key, so the hyphens every
/// multi-word slug carries stay unambiguous. The user id sits in the
/// middle and therefore must be separator-free.
///
/// # Errors
///
/// Returns a [`KeyError`] when either component is empty or the user id
/// contains the separator.
pub fn favorite_key(user_id: &str, recipe_id: &str) -> Result<String, KeyError> {
    if user_id.is_empty() {
        return Err(KeyError::EmptyComponent("user id"));
    }
    if recipe_id.is_empty() {
        return Err(KeyError::EmptyComponent("recipe id"));
    }
    if user_id.contains(SEPARATOR) {
        return Err(KeyError::SeparatorInUserId(user_id.to_string()));
    }
    Ok(format!("{PREFIX}{SEPARATOR}{user_id}{SEPARATOR}{recipe_id}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_user_and_recipe() {
        assert_eq!(
            favorite_key("alice", "chocolate-chip-cookies").unwrap(),
            "fav-alice-chocolate-chip-cookies"
        );
    }

    #[test]
    fn same_pair_yields_same_key() {
        assert_eq!(favorite_key("bob", "tacos").unwrap(), favorite_key("bob", "tacos").unwrap());
    }

    #[test]
    fn empty_user_is_rejected() {
        assert_eq!(favorite_key("", "tacos"), Err(KeyError::EmptyComponent("user id")));
    }

    #[test]
    fn empty_recipe_is_rejected() {
        assert_eq!(favorite_key("alice", ""), Err(KeyError::EmptyComponent("recipe id")));
    }

    #[test]
    fn hyphenated_user_is_rejected() {
        assert_eq!(
            favorite_key("a-lice", "tacos"),
            Err(KeyError::SeparatorInUserId("a-lice".to_string()))
        );
    }

    #[test]
    fn hyphenated_recipe_is_allowed() {
        assert!(favorite_key("alice", "five-spice-duck").is_ok());
    }
}
