//! Identifier generation: title slugs and composite favorite keys.
//!
//! Every key this system writes is derived deterministically: a slug from
//! a recipe title, or `fav-{user}-{recipe}` for the favorites relation.
//! Nothing here talks to the store; collision handling against live data
//! belongs to [`crate::book`].

mod composite;
mod slug;

pub use composite::favorite_key;
pub use slug::slugify;

use thiserror::Error;

/// The character joining key components.
pub const SEPARATOR: char = '-';

/// Failure to derive a key from caller input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The title has no letters or digits to build a slug from.
    #[error("title {0:?} contains no letters or digits")]
    UnusableTitle(String),
    /// A composite key component is empty.
    #[error("{0} must not be empty")]
    EmptyComponent(&'static str),
    /// The user id would make the composite key ambiguous to parse.
    #[error("user id {0:?} must not contain '-'")]
    SeparatorInUserId(String),
}
