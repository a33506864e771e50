//! Title-to-slug derivation.

use super::{KeyError, SEPARATOR};

/// Derives a URL-safe key from a free-text title.
///
/// ASCII letters and digits are lowercased and kept; every other run of
/// characters collapses to a single `-`. Leading and trailing separators
/// never appear because a separator is only emitted between kept
/// characters. The result is stable for a given title.
///
/// # Errors
///
/// Returns [`KeyError::UnusableTitle`] when nothing survives
/// normalization, so an empty key can never reach the store.
pub fn slugify(title: &str) -> Result<String, KeyError> {
    let mut slug = String::with_capacity(title.len());
    let mut gap = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if gap && !slug.is_empty() {
                slug.push(SEPARATOR);
            }
            gap = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            gap = true;
        }
    }

    if slug.is_empty() {
        return Err(KeyError::UnusableTitle(title.to_string()));
    }
    Ok(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_joins_words() {
        assert_eq!(slugify("Chocolate Chip Cookies").unwrap(), "chocolate-chip-cookies");
    }

    #[test]
    fn trailing_punctuation_is_dropped() {
        assert_eq!(slugify("Chocolate Chip Cookies!!").unwrap(), "chocolate-chip-cookies");
    }

    #[test]
    fn punctuation_runs_collapse_to_one_separator() {
        assert_eq!(slugify("mac & cheese -- deluxe").unwrap(), "mac-cheese-deluxe");
    }

    #[test]
    fn leading_separators_are_stripped() {
        assert_eq!(slugify("  ...Tacos al Pastor").unwrap(), "tacos-al-pastor");
    }

    #[test]
    fn digits_survive() {
        assert_eq!(slugify("5-Minute Bread").unwrap(), "5-minute-bread");
    }

    #[test]
    fn non_ascii_characters_act_as_separators() {
        assert_eq!(slugify("Crème Brûlée").unwrap(), "cr-me-br-l-e");
    }

    #[test]
    fn deterministic_across_calls() {
        let a = slugify("Homemade Pizza").unwrap();
        let b = slugify("Homemade Pizza").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_title_is_rejected() {
        assert_eq!(slugify(""), Err(KeyError::UnusableTitle(String::new())));
    }

    #[test]
    fn punctuation_only_title_is_rejected() {
        assert!(matches!(slugify("!!! ???"), Err(KeyError::UnusableTitle(_))));
        assert!(matches!(slugify("   "), Err(KeyError::UnusableTitle(_))));
    }
}
