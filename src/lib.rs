#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Collection - generic container combinators over dynamically typed values.
//!
//! # Overview
//!
//! Any container that implements the [`Collection`] contract (indexed read and
//! write, length, append, and an empty sibling) gets the five combinators in
//! [`algo`] for free:
//!
//! - [`map`]: build a new collection by transforming every element
//! - [`map_x`]: transform every element in place
//! - [`reduce`]: left fold from a seed value
//! - [`reduce_first`]: left fold seeded by the first element
//! - [`filter`]: build a new collection from the elements matching a predicate
//!
//! Elements are [`Value`]s. The combinators never look inside them; callbacks
//! interpret values through checked downcasts and fail fast on a mismatch.
//!
//! # Quick Start
//!
//! ```
//! use collection::{Collection, Value, Vector, filter, map, reduce};
//!
//! let v = Vector::from_ints([1, 2, 3]);
//!
//! let doubled = map(&v, |x| Value::Int(x.as_int().unwrap() * 2));
//! assert_eq!(doubled.to_string(), "[2 4 6]");
//!
//! let sum = reduce(&v, |acc, x| Value::Int(acc.as_int().unwrap() + x.as_int().unwrap()), Value::Int(0));
//! assert_eq!(sum, Value::Int(6));
//!
//! let even = filter(&v, |x| x.as_int().unwrap() % 2 == 0);
//! assert_eq!(even.len(), 1);
//! ```
//!
//! # Adapters
//!
//! Two adapters ship with the crate: [`Vector`] (a plain `Vec`) and
//! [`SmallVector`] (inline storage for short collections). Both render as
//! `[e0 e1 e2]`.

extern crate alloc;

pub mod adapters;
pub mod algo;
pub mod error;
pub mod traits;
pub mod value;

pub use adapters::{SmallVector, Vector};
pub use algo::{filter, map, map_x, reduce, reduce_first};
pub use error::TypeError;
pub use traits::{BinaryFunction, Collection, UnaryFunction, UnaryPredicate};
pub use value::{Kind, Marshal, Value};
