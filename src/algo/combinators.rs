use crate::{traits::Collection, value::Value};

// ============================================================================
// Transformations
// ============================================================================

/// Map a function over a collection
///
/// Non-destructive: starts from `c.empty()` and appends `f(c.item(i))` for
/// each index in order. `c` is left unchanged.
///
/// # Examples
/// - `map([1, 2, 3], double)` → `[2, 4, 6]`
/// - `map([], double)` → `[]`
pub fn map<C, F>(c: &C, mut f: F) -> C
where
    C: Collection,
    F: FnMut(Value) -> Value,
{
    let len = c.len();
    tracing::trace!(combinator = "map", len);

    let mut results = c.empty();
    for index in 0..len {
        results = results.append(f(c.item(index)));
    }
    results
}

/// Map a function over a collection in place
///
/// Destructive: replaces each element with `f(element)` via `set_item`, left
/// to right, and returns the same collection.
///
/// # Examples
/// - `map_x([2, 4, 6], double)` → source becomes `[4, 8, 12]`
pub fn map_x<C, F>(c: &mut C, mut f: F) -> &mut C
where
    C: Collection,
    F: FnMut(Value) -> Value,
{
    let len = c.len();
    tracing::trace!(combinator = "map_x", len);

    for index in 0..len {
        let item = c.item(index);
        c.set_item(index, f(item));
    }
    c
}

// ============================================================================
// Folds
// ============================================================================

/// Left fold from a seed
///
/// The first argument to `f` is the accumulator (starting at `initial`), the
/// second is the current element. An empty collection returns `initial`.
///
/// # Examples
/// - `reduce([2, 4, 6], add, 0)` → `12`
/// - `reduce([], add, 5)` → `5`
pub fn reduce<C, F>(c: &C, mut f: F, initial: Value) -> Value
where
    C: Collection,
    F: FnMut(Value, Value) -> Value,
{
    let len = c.len();
    tracing::trace!(combinator = "reduce", len);

    let mut result = initial;
    for index in 0..len {
        result = f(result, c.item(index));
    }
    result
}

/// Left fold seeded by the first element
///
/// Works like [`reduce`] with `c.item(0)` as the initial value, folding over
/// indices `1..len`.
///
/// # Panics
///
/// Panics with an out-of-bounds fault if `c` is empty: there is no seed to
/// fall back to.
///
/// # Examples
/// - `reduce_first([1, 2, 3], add)` → `6`
/// - `reduce_first([9], add)` → `9`
pub fn reduce_first<C, F>(c: &C, mut f: F) -> Value
where
    C: Collection,
    F: FnMut(Value, Value) -> Value,
{
    let len = c.len();
    tracing::trace!(combinator = "reduce_first", len);

    let mut result = c.item(0);
    for index in 1..len {
        result = f(result, c.item(index));
    }
    result
}

// ============================================================================
// Selection
// ============================================================================

/// Keep the elements matching a predicate
///
/// Non-destructive: starts from `c.empty()` and appends every element for
/// which `p` returns `true`, in their original relative order.
///
/// # Examples
/// - `filter([1, 2, 3], is_even)` → `[2]`
/// - `filter([1, 3], is_even)` → `[]`
pub fn filter<C, P>(c: &C, mut p: P) -> C
where
    C: Collection,
    P: FnMut(&Value) -> bool,
{
    let len = c.len();
    tracing::trace!(combinator = "filter", len);

    let mut result = c.empty();
    for index in 0..len {
        let item = c.item(index);
        if p(&item) {
            result = result.append(item);
        }
    }
    result
}

#[cfg(test)]
#[path = "combinators_test.rs"]
mod combinators_test;
