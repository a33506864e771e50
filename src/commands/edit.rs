//! `ladle edit` command.

use crate::book::RecipeBook;
use crate::cli::EditArgs;
use crate::model::RecipePatch;

/// Execute the `edit` command: merge the given flags into a recipe.
///
/// # Errors
///
/// Returns an error string when no field flag was passed, or when
/// validation or the store write fails.
pub fn run(book: &RecipeBook<'_>, user_id: &str, args: &EditArgs) -> Result<(), String> {
    let patch = RecipePatch {
        title: args.title.clone(),
        description: args.description.clone(),
        prep_time: args.prep_time,
        cook_time: args.cook_time,
        servings: args.servings,
        ingredients: args.ingredients.clone(),
        instructions: args.instructions.clone(),
        category: args.category.clone(),
        tags: args.tags.clone(),
    };
    if patch.is_empty() {
        return Err("nothing to change: pass at least one field flag".to_string());
    }

    book.update_recipe(&args.key, user_id, &patch).map_err(|e| e.to_string())?;
    println!("Updated {}", args.key);
    Ok(())
}
