//! Rule set definition.
//!
//! This module contains the table mapping field names to their directive
//! strings. The table is built once at engine configuration time and never
//! mutated afterwards.

use serde::{Deserialize, Serialize};

/// The validation rules for a single field.
///
/// `spec` is the raw pipe-delimited directive string, e.g.
/// `"required|string|min:6"`. It is parsed per `validate` call; the engine
/// performs no schema compilation or caching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRules {
    /// Field name the rules apply to
    pub field: String,

    /// Pipe-delimited rule directives
    pub spec: String,
}

/// An ordered table of per-field validation rules.
///
/// Fields are evaluated in the order they were declared here, not in the
/// order they appear in the submitted data. The engine reports the first
/// declared field with an outstanding error.
///
/// # Example
///
/// ```rust
/// use validation_core::RuleSetBuilder;
///
/// let rules = RuleSetBuilder::new()
///     .field("username", "required|string|alphanum")
///     .field("age", "integer|min:16|max:40")
///     .build();
///
/// let declared: Vec<_> = rules.iter().map(|f| f.field.as_str()).collect();
/// assert_eq!(declared, vec!["username", "age"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Per-field rules in declaration order
    pub fields: Vec<FieldRules>,
}

impl RuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a rule set from a list of per-field rules.
    pub fn from_fields(fields: Vec<FieldRules>) -> Self {
        Self { fields }
    }

    /// Returns the number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the declared fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldRules> {
        self.fields.iter()
    }

    /// Returns the directive string declared for a field, if any.
    pub fn spec_for(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.spec.as_str())
    }
}
