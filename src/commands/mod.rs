//! Command dispatch and handlers.

pub mod add;
pub mod edit;
pub mod fav;
pub mod list;
pub mod remove;
pub mod repair;
pub mod show;

use crate::book::{RecipeBook, RetryPolicy};
use crate::cli::Command;
use crate::config::Config;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// Configuration and the service context are assembled once here and
/// borrowed by whichever handler runs.
///
/// # Errors
///
/// Returns an error string if configuration, context setup, or the
/// selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let config = Config::from_env().map_err(|e| e.to_string())?;
    let ctx = ServiceContext::from_config(&config).map_err(|e| e.to_string())?;
    dispatch_with_context(command, &ctx, &config)
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    config: &Config,
) -> Result<(), String> {
    let book = RecipeBook::new(ctx, RetryPolicy::from_config(config));
    match command {
        Command::Add(args) => add::run(&book, &config.user_id, args),
        Command::Show { key } => show::run(&book, key),
        Command::Edit(args) => edit::run(&book, &config.user_id, args),
        Command::Remove { key } => remove::run(&book, &config.user_id, key),
        Command::List(args) => list::run(&book, &config.user_id, args),
        Command::Fav(fav_command) => fav::run(&book, &config.user_id, fav_command),
        Command::Repair => repair::run(&book),
    }
}
