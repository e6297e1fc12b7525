use core::fmt;

use smallvec::SmallVec;

use crate::{traits::Collection, value::Value};

use super::write_items;

/// Number of elements a [`SmallVector`] stores without allocating.
pub const INLINE_CAPACITY: usize = 8;

/// A collection that keeps up to [`INLINE_CAPACITY`] elements inline.
///
/// Same contract and rendering as [`Vector`](super::Vector). Past the inline
/// capacity the storage moves to the heap; [`spilled`](SmallVector::spilled)
/// reports when that has happened.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SmallVector {
    items: SmallVec<[Value; INLINE_CAPACITY]>,
}

impl SmallVector {
    pub fn new() -> Self {
        Self {
            items: SmallVec::new(),
        }
    }

    pub fn from_values(items: impl IntoIterator<Item = Value>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    pub fn from_ints(ints: impl IntoIterator<Item = i64>) -> Self {
        Self::from_values(ints.into_iter().map(Value::Int))
    }

    /// Whether the elements have moved to heap storage.
    pub fn spilled(&self) -> bool {
        self.items.spilled()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Value> {
        self.items.iter()
    }
}

impl Collection for SmallVector {
    fn item(&self, index: usize) -> Value {
        self.items[index].clone()
    }

    fn set_item(&mut self, index: usize, value: Value) -> Value {
        core::mem::replace(&mut self.items[index], value)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn append(mut self, item: Value) -> Self {
        self.items.push(item);
        self
    }

    fn empty(&self) -> Self {
        Self {
            items: SmallVec::with_capacity(self.items.len()),
        }
    }
}

impl fmt::Display for SmallVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_items(f, self.items.iter())
    }
}

impl FromIterator<Value> for SmallVector {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<'a> IntoIterator for &'a SmallVector {
    type Item = &'a Value;
    type IntoIter = core::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
