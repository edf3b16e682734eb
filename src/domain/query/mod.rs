//! Composable query predicates.
//!
//! - [`FieldRef`] - typed references to entity fields
//! - [`Predicate`] - immutable boolean expression trees
//!
//! Predicates are built client-side and evaluated by the storage backend
//! they are handed to.

pub mod field;
pub mod predicate;

pub use field::FieldRef;
pub use predicate::{CompareOp, Comparison, Predicate};
