//! Error types for value interpretation.
//!
//! Contract violations on collections (out-of-bounds access, `reduce_first`
//! on an empty collection) are panics, not errors. The only recoverable error
//! is a failed downcast of a [`Value`](crate::Value), which callbacks usually
//! unwrap to get fail-fast behaviour.

use thiserror::Error;

use crate::value::Kind;

/// A [`Value`](crate::Value) was interpreted as a kind it does not hold.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeError {
    #[error("type mismatch: expected {expected}, found {found}")]
    Mismatch { expected: Kind, found: Kind },
}

impl TypeError {
    pub(crate) fn mismatch(expected: Kind, found: Kind) -> Self {
        TypeError::Mismatch { expected, found }
    }
}
