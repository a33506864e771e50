//! Core library for the `ladle` CLI.

pub mod adapters;
pub mod book;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod keys;
pub mod model;
pub mod ports;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["ladle", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_errors_without_a_subcommand() {
        let result = run(["ladle"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_errors_when_add_lacks_a_title() {
        let result = run(["ladle", "add"]);
        assert!(result.unwrap_err().contains("--title"));
    }
}
