//! Command implementations.
//!
//! Every subcommand builds a collection from its integer items, runs one
//! combinator with the selected builtin, and returns the rendered result.

use std::fmt::Display;

use collection::{
    Collection, SmallVector, Value, Vector, filter, map, map_x, reduce, reduce_first,
};

use crate::builtins;
use crate::cli::Command;
use crate::common::error::{CliError, CliResult};

/// Run a command against the adapter selected by `small`.
pub fn run(command: Command, small: bool) -> CliResult<String> {
    if small {
        run_with::<SmallVector>(command)
    } else {
        run_with::<Vector>(command)
    }
}

fn run_with<C>(command: Command) -> CliResult<String>
where
    C: Collection + FromIterator<Value> + Display,
{
    let output = match command {
        Command::Map(args) => {
            let f = builtins::unary(&args.function)?;
            map(&collect::<C>(&args.items), f).to_string()
        }
        Command::MapX(args) => {
            let f = builtins::unary(&args.function)?;
            let mut items = collect::<C>(&args.items);
            map_x(&mut items, f);
            items.to_string()
        }
        Command::Reduce(args) => {
            let f = builtins::binary(&args.function)?;
            reduce(&collect::<C>(&args.items), f, Value::Int(args.initial)).to_string()
        }
        Command::ReduceFirst(args) => {
            let f = builtins::binary(&args.function)?;
            if args.items.is_empty() {
                return Err(CliError::NoItems {
                    command: "reduce-first",
                });
            }
            reduce_first(&collect::<C>(&args.items), f).to_string()
        }
        Command::Filter(args) => {
            let p = builtins::predicate(&args.function)?;
            filter(&collect::<C>(&args.items), p).to_string()
        }
    };
    Ok(output)
}

fn collect<C: FromIterator<Value>>(items: &[i64]) -> C {
    items.iter().copied().map(Value::Int).collect()
}
