//! `ladle list` command.

use crate::book::{RecipeBook, RecipeFilter};
use crate::cli::ListArgs;

/// Execute the `list` command: print matching recipes, one per line.
///
/// Without `--all`, only the acting user's recipes are listed.
///
/// # Errors
///
/// Returns an error string when the query fails.
pub fn run(book: &RecipeBook<'_>, user_id: &str, args: &ListArgs) -> Result<(), String> {
    let filter = RecipeFilter {
        user_id: (!args.all).then(|| user_id.to_string()),
        category: args.category.clone(),
        tags: args.tags.clone(),
    };

    let rows = book.query_recipes(&filter).map_err(|e| e.to_string())?;
    if rows.is_empty() {
        println!("No recipes found.");
        return Ok(());
    }

    for (key, recipe) in &rows {
        println!("{key}  {} ({}, serves {})", recipe.title, recipe.category, recipe.servings);
    }
    println!("\nUse `ladle show <KEY>` to view a recipe.");
    Ok(())
}
