//! `ladle remove` command.

use crate::book::RecipeBook;
use crate::error::BookError;

/// Execute the `remove` command: delete a recipe and cascade over its
/// favorites.
///
/// A partial cascade still deleted the recipe; the stragglers are listed
/// and the command exits nonzero so scripts notice.
///
/// # Errors
///
/// Returns an error string when the delete fails or the cascade left
/// favorites behind.
pub fn run(book: &RecipeBook<'_>, user_id: &str, key: &str) -> Result<(), String> {
    match book.delete_recipe(key, user_id) {
        Ok(()) => {
            println!("Removed {key} and its favorites.");
            Ok(())
        }
        Err(BookError::PartialCascade { recipe, orphans }) => {
            for orphan in &orphans {
                eprintln!("left behind: {orphan}");
            }
            Err(format!(
                "recipe {recipe:?} was deleted, but not all of its favorites; \
                 run `ladle repair` to finish the cleanup"
            ))
        }
        Err(err) => Err(err.to_string()),
    }
}
