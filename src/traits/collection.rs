//! The indexed-collection contract shared by every adapter.

use crate::value::Value;

/// Callback shape expected by [`map`](crate::map) and [`map_x`](crate::map_x).
pub type UnaryFunction = fn(Value) -> Value;

/// Callback shape expected by [`filter`](crate::filter).
pub type UnaryPredicate = fn(&Value) -> bool;

/// Callback shape expected by [`reduce`](crate::reduce) and
/// [`reduce_first`](crate::reduce_first).
pub type BinaryFunction = fn(Value, Value) -> Value;

/// A generic container with indexed access to each element.
///
/// This is the only seam the combinators in [`algo`](crate::algo) use; they
/// never touch a concrete adapter.
///
/// Implementations must guarantee:
/// - after `append(x)` on a collection of length `n`, the returned collection
///   has length `n + 1` and `item(n) == x`;
/// - after `set_item(i, x)`, `item(i) == x`, and the call returned the
///   previous occupant of `i`;
/// - `empty()` has length 0 and shares no storage with the receiver.
///
/// # Append Policy
///
/// `append` consumes the receiver and returns the collection that holds the
/// new element. Whether storage is reused or reallocated is up to the
/// implementation; either way the returned value is the only handle left.
pub trait Collection: Sized {
    /// Return the element at `index`.
    ///
    /// Panics if `index >= self.len()`.
    fn item(&self, index: usize) -> Value;

    /// Replace the element at `index` with `value` and return the previous one.
    ///
    /// Panics if `index >= self.len()`.
    fn set_item(&mut self, index: usize, value: Value) -> Value;

    /// The number of elements.
    fn len(&self) -> usize;

    /// Add `item` to the end and return the grown collection.
    fn append(self, item: Value) -> Self;

    /// A new, empty collection of the same kind.
    fn empty(&self) -> Self;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bounds-checked variant of [`item`](Collection::item).
    fn get(&self, index: usize) -> Option<Value> {
        (index < self.len()).then(|| self.item(index))
    }

    fn first(&self) -> Option<Value> {
        self.get(0)
    }
}
