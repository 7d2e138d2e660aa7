//! Error types for validation.

use thiserror::Error;

/// Result type for validation calls.
pub type ValidationResult = std::result::Result<(), ValidationError>;

/// The single defect a `validate` call stops at.
///
/// A call either fully succeeds or reports exactly one of these; there is
/// no partial success and no error aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A field's reconciled directive evaluation left an outstanding
    /// error. Reported for the first offending field in declaration
    /// order; later fields are never evaluated.
    #[error("{field} {message}")]
    Field {
        /// Name of the offending field
        field: String,
        /// Resolved user-facing message
        message: String,
    },

    /// A directive named a rule absent from the registry. This is a
    /// configuration defect and aborts the whole call regardless of
    /// per-field state.
    #[error("validation rule {0:?} does not exist")]
    UnknownRule(String),

    /// Strict mode: an input field has no declared rule spec. Reported
    /// for the first offending field in input order, only after all
    /// declared fields passed.
    #[error("{0:?} is not an expected field")]
    UnknownField(String),
}

impl ValidationError {
    /// Returns the field name this error concerns, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::Field { field, .. } => Some(field),
            ValidationError::UnknownField(field) => Some(field),
            ValidationError::UnknownRule(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ValidationError::Field {
            field: "age".into(),
            message: "must be at least 16".into(),
        };
        assert_eq!(err.to_string(), "age must be at least 16");

        let err = ValidationError::UnknownRule("int".into());
        assert_eq!(err.to_string(), "validation rule \"int\" does not exist");

        let err = ValidationError::UnknownField("extra".into());
        assert_eq!(err.to_string(), "\"extra\" is not an expected field");
    }

    #[test]
    fn test_field_accessor() {
        let err = ValidationError::Field {
            field: "age".into(),
            message: "m".into(),
        };
        assert_eq!(err.field(), Some("age"));
        assert_eq!(ValidationError::UnknownRule("x".into()).field(), None);
    }
}
