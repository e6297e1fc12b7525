use alloc::vec::Vec;
use core::fmt;

use crate::{traits::Collection, value::Value};

use super::write_items;

/// A collection backed by a `Vec<Value>`.
///
/// `len()` always equals the number of addressable elements: indices
/// `0..len()` are valid and there are no gaps.
///
/// # Example
///
/// ```
/// use collection::{Collection, Value, Vector};
///
/// let v = Vector::from_ints([1, 2, 3]);
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.to_string(), "[1 2 3]");
///
/// let v = v.append(Value::Int(4));
/// assert_eq!(v.item(3), Value::Int(4));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vector {
    items: Vec<Value>,
}

impl Vector {
    /// Create an empty vector.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty vector with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Create a vector holding `items` in order.
    pub fn from_values(items: impl IntoIterator<Item = Value>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Create a vector of `Int` values.
    pub fn from_ints(ints: impl IntoIterator<Item = i64>) -> Self {
        Self::from_values(ints.into_iter().map(Value::Int))
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn into_values(self) -> Vec<Value> {
        self.items
    }
}

impl Collection for Vector {
    fn item(&self, index: usize) -> Value {
        self.items[index].clone()
    }

    fn set_item(&mut self, index: usize, value: Value) -> Value {
        core::mem::replace(&mut self.items[index], value)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    /// Pushes onto the existing storage and hands it back.
    fn append(mut self, item: Value) -> Self {
        self.items.push(item);
        self
    }

    /// The new vector is pre-sized to the receiver's length.
    fn empty(&self) -> Self {
        Self::with_capacity(self.items.len())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_items(f, &self.items)
    }
}

// --- Construction ---

impl From<Vec<Value>> for Vector {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

/// `None` yields an empty vector.
impl From<Option<Vec<Value>>> for Vector {
    fn from(items: Option<Vec<Value>>) -> Self {
        items.map(Self::from).unwrap_or_default()
    }
}

/// `None` yields an empty vector.
impl From<Option<Vec<i64>>> for Vector {
    fn from(ints: Option<Vec<i64>>) -> Self {
        ints.map(Self::from_ints).unwrap_or_default()
    }
}

impl FromIterator<Value> for Vector {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

// --- Iteration ---

impl IntoIterator for Vector {
    type Item = Value;
    type IntoIter = alloc::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Value;
    type IntoIter = core::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
#[path = "vector_test.rs"]
mod vector_test;
