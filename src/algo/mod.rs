//! Combinator algorithms written once against the [`Collection`](crate::Collection)
//! contract.
//!
//! Every combinator reads `len()` exactly once before its traversal and then
//! walks the index range. Mutating the source from inside a callback is
//! therefore not observed by the traversal bounds.

mod combinators;

pub use combinators::{filter, map, map_x, reduce, reduce_first};
