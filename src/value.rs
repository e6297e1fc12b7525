//! Dynamically typed element values.
//!
//! A [`Value`] is the opaque element slot stored in every collection. The
//! collection contract and the combinators never inspect it; callbacks do, via
//! the checked accessors (`as_int`, `as_bool`, ...) or the generic
//! [`Value::downcast`]. A failed accessor returns [`TypeError`]. Callbacks that
//! unwrap it turn a mismatch into a panic at the point of interpretation.

use alloc::{rc::Rc, string::String};
use core::fmt;

use crate::error::TypeError;

/// The runtime kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Unit,
    Int,
    Bool,
    Float,
    Str,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Unit => "Unit",
            Kind::Int => "Int",
            Kind::Bool => "Bool",
            Kind::Float => "Float",
            Kind::Str => "Str",
        };
        f.write_str(name)
    }
}

/// A dynamically typed value.
///
/// Cloning is cheap: scalars are copied and strings share their buffer.
///
/// # Example
///
/// ```
/// use collection::{Kind, Value};
///
/// let v = Value::Int(42);
/// assert_eq!(v.kind(), Kind::Int);
/// assert_eq!(v.as_int(), Ok(42));
/// assert!(v.as_bool().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Unit,
    Int(i64),
    Bool(bool),
    Float(f64),
    Str(Rc<str>),
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
static_assertions::assert_eq_size!(Value, [usize; 3]);

impl Value {
    /// Create a string value.
    pub fn str(value: &str) -> Self {
        Value::Str(Rc::from(value))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Unit => Kind::Unit,
            Value::Int(_) => Kind::Int,
            Value::Bool(_) => Kind::Bool,
            Value::Float(_) => Kind::Float,
            Value::Str(_) => Kind::Str,
        }
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, Value::Unit)
    }

    pub fn as_int(&self) -> Result<i64, TypeError> {
        match self {
            Value::Int(v) => Ok(*v),
            other => Err(TypeError::mismatch(Kind::Int, other.kind())),
        }
    }

    pub fn as_bool(&self) -> Result<bool, TypeError> {
        match self {
            Value::Bool(v) => Ok(*v),
            other => Err(TypeError::mismatch(Kind::Bool, other.kind())),
        }
    }

    pub fn as_float(&self) -> Result<f64, TypeError> {
        match self {
            Value::Float(v) => Ok(*v),
            other => Err(TypeError::mismatch(Kind::Float, other.kind())),
        }
    }

    pub fn as_str(&self) -> Result<&str, TypeError> {
        match self {
            Value::Str(v) => Ok(&**v),
            other => Err(TypeError::mismatch(Kind::Str, other.kind())),
        }
    }

    /// Extract a Rust value of type `T`.
    ///
    /// Returns [`TypeError::Mismatch`] when the value does not hold `T::KIND`.
    ///
    /// ```
    /// use collection::Value;
    ///
    /// let v = Value::Float(1.5);
    /// assert_eq!(v.downcast::<f64>(), Ok(1.5));
    /// assert!(v.downcast::<i64>().is_err());
    /// ```
    pub fn downcast<T: Marshal>(&self) -> Result<T, TypeError> {
        T::from_value(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => f.write_str("()"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Str(v) => f.write_str(v),
        }
    }
}

// =============================================================================
// Marshal - Rust types that a Value can hold
// =============================================================================

/// Marshalling between a Rust type and a [`Value`].
///
/// Implemented for `i64` (`Int`), `bool` (`Bool`), `f64` (`Float`) and
/// `Rc<str>` (`Str`).
pub trait Marshal: Sized {
    /// The kind of value this type is stored as.
    const KIND: Kind;

    /// Extract from a value, or report which kind was found instead.
    fn from_value(value: &Value) -> Result<Self, TypeError>;

    /// Wrap into a value.
    fn into_value(self) -> Value;
}

impl Marshal for i64 {
    const KIND: Kind = Kind::Int;

    fn from_value(value: &Value) -> Result<Self, TypeError> {
        value.as_int()
    }

    fn into_value(self) -> Value {
        Value::Int(self)
    }
}

impl Marshal for bool {
    const KIND: Kind = Kind::Bool;

    fn from_value(value: &Value) -> Result<Self, TypeError> {
        value.as_bool()
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl Marshal for f64 {
    const KIND: Kind = Kind::Float;

    fn from_value(value: &Value) -> Result<Self, TypeError> {
        value.as_float()
    }

    fn into_value(self) -> Value {
        Value::Float(self)
    }
}

impl Marshal for Rc<str> {
    const KIND: Kind = Kind::Str;

    fn from_value(value: &Value) -> Result<Self, TypeError> {
        match value {
            Value::Str(v) => Ok(Rc::clone(v)),
            other => Err(TypeError::mismatch(Kind::Str, other.kind())),
        }
    }

    fn into_value(self) -> Value {
        Value::Str(self)
    }
}

// --- Conversions ---

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Unit
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::str(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(Rc::from(value))
    }
}

impl From<Rc<str>> for Value {
    fn from(value: Rc<str>) -> Self {
        Value::Str(value)
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod value_test;
