//! Error handling utilities for the CLI.

use thiserror::Error;

/// Errors a command reports before running any combinator.
///
/// Faults raised inside a combinator (a builtin given a value it cannot
/// interpret) are panics and go through the panic handler instead.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("unknown {kind} builtin `{name}` (available: {available})")]
    UnknownBuiltin {
        kind: &'static str,
        name: String,
        available: String,
    },

    #[error("`{command}` needs at least one item")]
    NoItems { command: &'static str },
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: CliError) -> ! {
    eprintln!("error: {error}");
    std::process::exit(1);
}
