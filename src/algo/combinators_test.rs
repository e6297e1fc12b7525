//! Tests for the combinators

use super::{filter, map, map_x, reduce, reduce_first};
use crate::{adapters::Vector, test_utils::init_test_logging, traits::Collection, value::Value};
use alloc::{vec, vec::Vec};
use core::cell::Cell;
use pretty_assertions::assert_eq;

fn double_int(v: Value) -> Value {
    Value::Int(v.as_int().unwrap() * 2)
}

fn add_int(a: Value, b: Value) -> Value {
    Value::Int(a.as_int().unwrap() + b.as_int().unwrap())
}

fn is_even_int(v: &Value) -> bool {
    v.as_int().unwrap() % 2 == 0
}

/// Wraps a `Vector` and counts how often `len()` is queried.
struct CountingLen<'a> {
    inner: Vector,
    len_calls: &'a Cell<usize>,
}

impl<'a> CountingLen<'a> {
    fn new(inner: Vector, len_calls: &'a Cell<usize>) -> Self {
        Self { inner, len_calls }
    }
}

impl Collection for CountingLen<'_> {
    fn item(&self, index: usize) -> Value {
        self.inner.item(index)
    }

    fn set_item(&mut self, index: usize, value: Value) -> Value {
        self.inner.set_item(index, value)
    }

    fn len(&self) -> usize {
        self.len_calls.set(self.len_calls.get() + 1);
        self.inner.len()
    }

    fn append(self, item: Value) -> Self {
        Self {
            inner: self.inner.append(item),
            len_calls: self.len_calls,
        }
    }

    fn empty(&self) -> Self {
        Self {
            inner: Vector::new(),
            len_calls: self.len_calls,
        }
    }
}

// ============================================================================
// Map Tests
// ============================================================================

#[test]
fn test_map() {
    init_test_logging();

    let v = Vector::from_ints([1, 2, 3]);
    let mv = map(&v, double_int);

    assert_eq!(mv, Vector::from_ints([2, 4, 6]));
    assert_eq!(mv.len(), v.len());
    for index in 0..v.len() {
        assert_eq!(mv.item(index), double_int(v.item(index)));
    }
}

#[test]
fn test_map_leaves_source_unchanged() {
    let v = Vector::from_ints([1, 2, 3]);
    let _ = map(&v, double_int);
    assert_eq!(v, Vector::from_ints([1, 2, 3]));
}

#[test]
fn test_map_empty() {
    let v = Vector::new();
    let mv = map(&v, double_int);
    assert!(mv.is_empty());
}

#[test]
fn test_map_can_change_kind() {
    let v = Vector::from_ints([1, 2]);
    let mv = map(&v, |x| Value::Bool(x.as_int().unwrap() > 1));
    assert_eq!(mv.to_string(), "[false true]");
}

// ============================================================================
// MapX Tests
// ============================================================================

#[test]
fn test_map_x() {
    let mut v = Vector::from_ints([2, 4, 6]);
    let r = map_x(&mut v, double_int);

    assert_eq!(r.to_string(), "[4 8 12]");
    assert_eq!(v.to_string(), "[4 8 12]");
}

#[test]
fn test_map_x_applies_left_to_right() {
    let mut seen = Vec::new();
    let mut v = Vector::from_ints([3, 1, 2]);

    map_x(&mut v, |x| {
        seen.push(x.as_int().unwrap());
        Value::Int(seen.len() as i64)
    });

    assert_eq!(seen, vec![3, 1, 2]);
    assert_eq!(v, Vector::from_ints([1, 2, 3]));
}

// ============================================================================
// Reduce Tests
// ============================================================================

#[test]
fn test_reduce() {
    let v = Vector::from_ints([2, 4, 6]);
    assert_eq!(reduce(&v, add_int, Value::Int(0)), Value::Int(12));
}

#[test]
fn test_reduce_empty_returns_initial() {
    let v = Vector::new();
    assert_eq!(reduce(&v, add_int, Value::Int(5)), Value::Int(5));

    // The combiner is never called, so the seed can be any kind.
    assert_eq!(
        reduce(&v, add_int, Value::str("seed")),
        Value::str("seed")
    );
}

#[test]
fn test_reduce_is_a_left_fold() {
    let v = Vector::from_values([Value::str("a"), Value::str("b"), Value::str("c")]);
    let concat = |acc: Value, x: Value| {
        let mut s = acc.as_str().unwrap().to_string();
        s.push_str(x.as_str().unwrap());
        Value::from(s)
    };

    assert_eq!(reduce(&v, concat, Value::str(">")), Value::str(">abc"));
}

// ============================================================================
// ReduceFirst Tests
// ============================================================================

#[test]
fn test_reduce_first() {
    let v = Vector::from_ints([1, 2, 3]);
    assert_eq!(reduce_first(&v, add_int), Value::Int(6));
}

#[test]
fn test_reduce_first_single_element() {
    let v = Vector::from_ints([9]);
    assert_eq!(reduce_first(&v, add_int), Value::Int(9));
}

#[test]
fn test_reduce_first_matches_reduce_over_tail() {
    let v = Vector::from_ints([10, 3, 2]);
    let sub = |a: Value, b: Value| Value::Int(a.as_int().unwrap() - b.as_int().unwrap());

    let tail = Vector::from_ints([3, 2]);
    assert_eq!(reduce_first(&v, sub), reduce(&tail, sub, v.item(0)));
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn test_reduce_first_empty_panics() {
    let v = Vector::new();
    reduce_first(&v, add_int);
}

// ============================================================================
// Filter Tests
// ============================================================================

#[test]
fn test_filter() {
    let v = Vector::from_ints([1, 2, 3]);
    let filtered = filter(&v, is_even_int);

    assert_eq!(filtered.item(0), Value::Int(2));
    assert_eq!(filtered.len(), 1);
    assert_eq!(v.len(), 3);
}

#[test]
fn test_filter_preserves_order() {
    let v = Vector::from_ints([8, 1, 6, 3, 4]);
    assert_eq!(filter(&v, is_even_int), Vector::from_ints([8, 6, 4]));
}

#[test]
fn test_filter_none_match() {
    let v = Vector::from_ints([1, 3, 5]);
    assert!(filter(&v, is_even_int).is_empty());
}

// ============================================================================
// Contract Tests
// ============================================================================

#[test]
fn test_length_is_read_once() {
    let calls = Cell::new(0);
    let source = || Vector::from_ints([1, 2, 3, 4]);

    let c = CountingLen::new(source(), &calls);
    let _ = map(&c, double_int);
    assert_eq!(calls.replace(0), 1);

    let mut c = CountingLen::new(source(), &calls);
    map_x(&mut c, double_int);
    assert_eq!(calls.replace(0), 1);

    let c = CountingLen::new(source(), &calls);
    reduce(&c, add_int, Value::Int(0));
    assert_eq!(calls.replace(0), 1);

    let c = CountingLen::new(source(), &calls);
    reduce_first(&c, add_int);
    assert_eq!(calls.replace(0), 1);

    let c = CountingLen::new(source(), &calls);
    let _ = filter(&c, is_even_int);
    assert_eq!(calls.replace(0), 1);
}

#[test]
#[should_panic(expected = "Mismatch")]
fn test_callback_type_mismatch_panics() {
    let v = Vector::from_values([Value::Int(1), Value::str("two")]);
    let _ = map(&v, double_int);
}
