//! Collection CLI - run a combinator over integers from the command line.

mod builtins;
mod cli;
mod commands;
mod common;

use clap::Parser;
use cli::Cli;

fn main() {
    // Report callback faults (type mismatches, overflow) as one-line errors
    common::panic::install_handler();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, small = cli.small, "Parsed command line");

    match commands::run(cli.command, cli.small) {
        Ok(output) => println!("{output}"),
        Err(e) => common::error::render_and_exit(e),
    }
}
