//! Named callbacks selectable with `--fn`.
//!
//! Every builtin interprets its arguments as `Int` and panics on anything else.

use collection::{BinaryFunction, UnaryFunction, UnaryPredicate, Value};

use crate::common::error::{CliError, CliResult};

const UNARY: &[(&str, UnaryFunction)] = &[
    ("double", double),
    ("square", square),
    ("negate", negate),
    ("increment", increment),
];

const BINARY: &[(&str, BinaryFunction)] = &[("add", add), ("mul", mul), ("max", max), ("min", min)];

const PREDICATES: &[(&str, UnaryPredicate)] =
    &[("even", is_even), ("odd", is_odd), ("positive", is_positive)];

pub fn unary(name: &str) -> CliResult<UnaryFunction> {
    lookup(UNARY, "unary", name)
}

pub fn binary(name: &str) -> CliResult<BinaryFunction> {
    lookup(BINARY, "binary", name)
}

pub fn predicate(name: &str) -> CliResult<UnaryPredicate> {
    lookup(PREDICATES, "predicate", name)
}

fn lookup<F: Copy>(table: &[(&str, F)], kind: &'static str, name: &str) -> CliResult<F> {
    let found = table.iter().find(|(n, _)| *n == name).map(|(_, f)| *f);
    tracing::debug!(kind, name, found = found.is_some(), "Builtin lookup");

    found.ok_or_else(|| CliError::UnknownBuiltin {
        kind,
        name: name.to_string(),
        available: table
            .iter()
            .map(|(n, _)| *n)
            .collect::<Vec<_>>()
            .join(", "),
    })
}

fn int(v: &Value) -> i64 {
    v.as_int().unwrap_or_else(|e| panic!("{e}"))
}

fn double(v: Value) -> Value {
    Value::Int(int(&v).wrapping_mul(2))
}

fn square(v: Value) -> Value {
    let x = int(&v);
    Value::Int(x.wrapping_mul(x))
}

fn negate(v: Value) -> Value {
    Value::Int(int(&v).wrapping_neg())
}

fn increment(v: Value) -> Value {
    Value::Int(int(&v).wrapping_add(1))
}

fn add(a: Value, b: Value) -> Value {
    Value::Int(int(&a).wrapping_add(int(&b)))
}

fn mul(a: Value, b: Value) -> Value {
    Value::Int(int(&a).wrapping_mul(int(&b)))
}

fn max(a: Value, b: Value) -> Value {
    Value::Int(int(&a).max(int(&b)))
}

fn min(a: Value, b: Value) -> Value {
    Value::Int(int(&a).min(int(&b)))
}

fn is_even(v: &Value) -> bool {
    int(v) % 2 == 0
}

fn is_odd(v: &Value) -> bool {
    int(v) % 2 != 0
}

fn is_positive(v: &Value) -> bool {
    int(v) > 0
}
