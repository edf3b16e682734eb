//! Predicate expression tree.
//!
//! Pure representation of query predicates. Building a predicate has no side
//! effects and never touches storage; interpretation happens in the backend
//! that receives the tree, either as SQL pushdown or in-process evaluation.

use crate::domain::query::FieldRef;

/// Comparison operator of a predicate leaf.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompareOp {
    Eq,
    StartsWith,
    Contains,
}

/// A single field comparison.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Comparison {
    pub field: FieldRef,
    pub op: CompareOp,
    pub value: String,
}

/// An immutable boolean expression tree over entity fields.
///
/// Leaves are built through [`FieldRef`] constructors; [`Predicate::and`]
/// and [`Predicate::or`] combine trees. Both operands of a combinator are
/// always fully built; there is no client-side short-circuiting.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Predicate {
    Compare(Comparison),
    And(Box<Predicate>, Box<Predicate>),
    Or(Box<Predicate>, Box<Predicate>),
}

impl Predicate {
    /// Logical conjunction of this predicate with another.
    #[must_use]
    pub fn and(self, other: Predicate) -> Predicate {
        Predicate::And(Box::new(self), Box::new(other))
    }

    /// Logical disjunction of this predicate with another.
    #[must_use]
    pub fn or(self, other: Predicate) -> Predicate {
        Predicate::Or(Box::new(self), Box::new(other))
    }
}
