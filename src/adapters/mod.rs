//! Concrete [`Collection`](crate::Collection) implementations.
//!
//! - [`Vector`]: contiguous heap storage, the reference adapter
//! - [`SmallVector`]: inline storage for up to [`INLINE_CAPACITY`] elements,
//!   spilling to the heap beyond that

use core::fmt;

use crate::value::Value;

mod small_vector;
mod vector;

pub use small_vector::{INLINE_CAPACITY, SmallVector};
pub use vector::Vector;

/// Render elements as `[e0 e1 e2]`: single spaces, no trailing separator.
fn write_items<'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = &'a Value>,
) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}
