//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for `ladle`.
#[derive(Debug, Parser)]
#[command(name = "ladle", version, about = "Manage a recipe book in a hosted document store")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new recipe.
    Add(AddArgs),
    /// Show one recipe in full.
    Show {
        /// Key of the recipe, e.g. `chocolate-chip-cookies`.
        key: String,
    },
    /// Edit fields of a recipe you own.
    Edit(EditArgs),
    /// Delete a recipe you own, along with everyone's favorites of it.
    Remove {
        /// Key of the recipe.
        key: String,
    },
    /// List recipes, with optional filters.
    List(ListArgs),
    /// Manage your favorites.
    #[command(subcommand)]
    Fav(FavCommand),
    /// Delete favorites whose recipe no longer exists.
    Repair,
}

/// Arguments for `ladle add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Recipe title; the key is derived from it.
    #[arg(long)]
    pub title: String,
    /// Free-text description.
    #[arg(long, default_value = "")]
    pub description: String,
    /// Preparation time in minutes.
    #[arg(long = "prep", default_value_t = 0)]
    pub prep_time: u32,
    /// Cooking time in minutes.
    #[arg(long = "cook", default_value_t = 0)]
    pub cook_time: u32,
    /// Servings the recipe yields.
    #[arg(long, default_value_t = 1)]
    pub servings: u32,
    /// Ingredient, in order; repeat per ingredient.
    #[arg(long = "ingredient")]
    pub ingredients: Vec<String>,
    /// Preparation step, in order; repeat per step.
    #[arg(long = "step")]
    pub instructions: Vec<String>,
    /// Category, e.g. "Dessert".
    #[arg(long, default_value = "Uncategorized")]
    pub category: String,
    /// Tag for filtering; repeat per tag.
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

/// Arguments for `ladle edit`. Only the flags you pass change.
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Key of the recipe to edit.
    pub key: String,
    /// New title (the key stays the same).
    #[arg(long)]
    pub title: Option<String>,
    /// New description.
    #[arg(long)]
    pub description: Option<String>,
    /// New preparation time in minutes.
    #[arg(long = "prep")]
    pub prep_time: Option<u32>,
    /// New cooking time in minutes.
    #[arg(long = "cook")]
    pub cook_time: Option<u32>,
    /// New servings count.
    #[arg(long)]
    pub servings: Option<u32>,
    /// Replacement ingredient list; repeat per ingredient.
    #[arg(long = "ingredient")]
    pub ingredients: Option<Vec<String>>,
    /// Replacement step list; repeat per step.
    #[arg(long = "step")]
    pub instructions: Option<Vec<String>>,
    /// New category.
    #[arg(long)]
    pub category: Option<String>,
    /// Replacement tag list; repeat per tag.
    #[arg(long = "tag")]
    pub tags: Option<Vec<String>>,
}

/// Arguments for `ladle list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only recipes in this category.
    #[arg(long)]
    pub category: Option<String>,
    /// Only recipes carrying this tag; repeat to require several.
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    /// List everyone's recipes, not just your own.
    #[arg(long)]
    pub all: bool,
}

/// Subcommands of `ladle fav`.
#[derive(Debug, Subcommand)]
pub enum FavCommand {
    /// Mark a recipe as a favorite (again, to update the note).
    Add {
        /// Key of the recipe to favorite.
        key: String,
        /// Optional note to keep with the favorite.
        #[arg(long)]
        notes: Option<String>,
    },
    /// Drop a recipe from your favorites.
    Remove {
        /// Key of the recipe to unfavorite.
        key: String,
    },
    /// List your favorites with their recipes.
    List,
}
