//! `ladle fav` subcommands.

use crate::book::RecipeBook;
use crate::cli::FavCommand;

/// Execute a `fav` subcommand for the acting user.
///
/// # Errors
///
/// Returns an error string when the underlying operation fails.
pub fn run(book: &RecipeBook<'_>, user_id: &str, command: &FavCommand) -> Result<(), String> {
    match command {
        FavCommand::Add { key, notes } => {
            book.add_favorite(user_id, key, notes.clone()).map_err(|e| e.to_string())?;
            println!("Favorited {key}");
            Ok(())
        }
        FavCommand::Remove { key } => {
            book.remove_favorite(user_id, key).map_err(|e| e.to_string())?;
            println!("Unfavorited {key}");
            Ok(())
        }
        FavCommand::List => {
            let favorites = book.favorites_with_recipes(user_id).map_err(|e| e.to_string())?;
            if favorites.is_empty() {
                println!("No favorites yet.");
                return Ok(());
            }
            for (favorite, recipe) in &favorites {
                match &favorite.notes {
                    Some(notes) => println!(
                        "{}  {} ({}): {notes}",
                        favorite.recipe_id, recipe.title, recipe.category
                    ),
                    None => println!(
                        "{}  {} ({})",
                        favorite.recipe_id, recipe.title, recipe.category
                    ),
                }
            }
            Ok(())
        }
    }
}
