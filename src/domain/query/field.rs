//! Typed field references used as predicate leaves.

use crate::domain::query::predicate::{CompareOp, Comparison, Predicate};

/// Zero-cost wrapper around a static field name used in predicates.
///
/// Enables method-based predicate building without allocating; carries only
/// a `&'static str` and derefs to `str`. Entity modules publish their field
/// roots as constants (see `domain::entities::customer::fields`). Backends
/// resolve the name against a closed field set and reject unknown names.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct FieldRef(&'static str);

impl FieldRef {
    /// Creates a new field reference.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the underlying field name.
    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// Case-sensitive equality against the given value.
    pub fn equals(self, value: impl Into<String>) -> Predicate {
        self.compare(CompareOp::Eq, value)
    }

    /// Case-sensitive prefix match.
    pub fn starts_with(self, prefix: impl Into<String>) -> Predicate {
        self.compare(CompareOp::StartsWith, prefix)
    }

    /// Case-sensitive substring match.
    pub fn contains(self, substring: impl Into<String>) -> Predicate {
        self.compare(CompareOp::Contains, substring)
    }

    fn compare(self, op: CompareOp, value: impl Into<String>) -> Predicate {
        Predicate::Compare(Comparison {
            field: self,
            op,
            value: value.into(),
        })
    }
}

impl AsRef<str> for FieldRef {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl std::ops::Deref for FieldRef {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NICKNAME: FieldRef = FieldRef::new("nickname");

    #[test]
    fn test_field_ref_exposes_its_name() {
        assert_eq!(NICKNAME.as_str(), "nickname");
        assert_eq!(NICKNAME.as_ref(), "nickname");
    }

    #[test]
    fn test_equals_builds_a_comparison_leaf() {
        let predicate = NICKNAME.equals("Dave");
        assert_eq!(
            predicate,
            Predicate::Compare(Comparison {
                field: NICKNAME,
                op: CompareOp::Eq,
                value: "Dave".to_string(),
            })
        );
    }

    #[test]
    fn test_starts_with_and_contains_carry_their_operator() {
        assert!(matches!(
            NICKNAME.starts_with("Da"),
            Predicate::Compare(Comparison {
                op: CompareOp::StartsWith,
                ..
            })
        ));
        assert!(matches!(
            NICKNAME.contains("av"),
            Predicate::Compare(Comparison {
                op: CompareOp::Contains,
                ..
            })
        ));
    }
}
