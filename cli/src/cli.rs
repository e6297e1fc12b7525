//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand};

/// Collection - run map, filter and reduce over a list of integers
#[derive(Parser, Debug)]
#[command(name = "collection", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Store items in an inline-storage collection instead of a heap vector
    #[arg(long, global = true)]
    pub small: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a new collection by applying a unary builtin to every item
    Map(UnaryArgs),

    /// Apply a unary builtin to every item in place and print the source
    MapX(UnaryArgs),

    /// Fold the items into one value, starting from `--initial`
    Reduce(ReduceArgs),

    /// Fold the items into one value, starting from the first item
    ReduceFirst(BinaryArgs),

    /// Keep the items matching a predicate builtin
    Filter(PredicateArgs),
}

/// Arguments for `map` and `map-x`.
#[derive(Args, Debug)]
pub struct UnaryArgs {
    /// Unary builtin: double, square, negate, increment
    #[arg(long = "fn", value_name = "NAME")]
    pub function: String,

    /// Items to transform
    #[arg(allow_negative_numbers = true)]
    pub items: Vec<i64>,
}

/// Arguments for `reduce`.
#[derive(Args, Debug)]
pub struct ReduceArgs {
    /// Binary builtin: add, mul, max, min
    #[arg(long = "fn", value_name = "NAME")]
    pub function: String,

    /// Seed value for the fold
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub initial: i64,

    /// Items to fold
    #[arg(allow_negative_numbers = true)]
    pub items: Vec<i64>,
}

/// Arguments for `reduce-first`.
#[derive(Args, Debug)]
pub struct BinaryArgs {
    /// Binary builtin: add, mul, max, min
    #[arg(long = "fn", value_name = "NAME")]
    pub function: String,

    /// Items to fold; at least one is required
    #[arg(allow_negative_numbers = true)]
    pub items: Vec<i64>,
}

/// Arguments for `filter`.
#[derive(Args, Debug)]
pub struct PredicateArgs {
    /// Predicate builtin: even, odd, positive
    #[arg(long = "fn", value_name = "NAME")]
    pub function: String,

    /// Items to filter
    #[arg(allow_negative_numbers = true)]
    pub items: Vec<i64>,
}
