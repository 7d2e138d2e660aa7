//! Builder for rule sets.
//!
//! Provides an ergonomic fluent API for constructing a `RuleSet` in code,
//! as an alternative to loading one from a rules file.

use crate::{FieldRules, RuleSet};

/// Builder for creating a `RuleSet`.
///
/// Field declaration order is the order of `field()` calls.
///
/// # Example
///
/// ```rust
/// use validation_core::RuleSetBuilder;
///
/// let rules = RuleSetBuilder::new()
///     .field("username", "required|string|min:3")
///     .field("password", "required|string|min:6|confirmed")
///     .field("age", "nullable|integer|min:16|max:40")
///     .build();
///
/// assert_eq!(rules.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    fields: Vec<FieldRules>,
}

impl RuleSetBuilder {
    /// Creates a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares validation rules for a field.
    ///
    /// Declaring the same field twice replaces the earlier spec while
    /// keeping the original declaration position.
    pub fn field(mut self, name: impl Into<String>, spec: impl Into<String>) -> Self {
        let name = name.into();
        let spec = spec.into();
        match self.fields.iter_mut().find(|f| f.field == name) {
            Some(existing) => existing.spec = spec,
            None => self.fields.push(FieldRules { field: name, spec }),
        }
        self
    }

    /// Builds the rule set.
    pub fn build(self) -> RuleSet {
        RuleSet::from_fields(self.fields)
    }
}
