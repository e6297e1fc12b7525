//! Common utilities shared across CLI commands.

pub mod error;
pub mod panic;
