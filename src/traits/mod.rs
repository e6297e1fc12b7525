mod collection;

pub use collection::{BinaryFunction, Collection, UnaryFunction, UnaryPredicate};
