//! `ladle add` command.

use crate::book::RecipeBook;
use crate::cli::AddArgs;
use crate::model::RecipeDraft;

/// Execute the `add` command: create a recipe from the given flags.
///
/// # Errors
///
/// Returns an error string when validation or the store write fails.
pub fn run(book: &RecipeBook<'_>, user_id: &str, args: &AddArgs) -> Result<(), String> {
    let draft = RecipeDraft {
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

    let key = book.create_recipe(user_id, draft).map_err(|e| e.to_string())?;
    println!("Created {key}");
    Ok(())
}
