//! `ladle show` command.

use crate::book::RecipeBook;

/// Execute the `show` command: print one recipe as YAML.
///
/// # Errors
///
/// Returns an error string when the recipe cannot be fetched or rendered.
pub fn run(book: &RecipeBook<'_>, key: &str) -> Result<(), String> {
    let recipe = book.recipe(key).map_err(|e| e.to_string())?;
    let yaml = serde_yaml::to_string(&recipe)
        .map_err(|e| format!("failed to render recipe {key}: {e}"))?;
    println!("# {key}");
    print!("{yaml}");
    Ok(())
}
