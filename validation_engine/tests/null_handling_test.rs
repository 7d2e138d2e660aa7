//! Tests to verify correct handling of null and absent values.
//!
//! This test suite ensures the engine keeps the two cases apart:
//! - An absent field skips ordinary rules entirely
//! - A present null field always fails unless `nullable` is declared
//! - `nullable` short-circuits every other rule once the value is null
//!
//! This prevents logical bugs where null values might incorrectly pass or
//! fail validation depending on which other directives are declared.

use validation_core::{FieldMap, FieldValue, RuleSetBuilder};
use validation_engine::{ValidationError, Validator};

fn null_field(name: &str) -> FieldMap {
    let mut fields = FieldMap::new();
    fields.insert(name, FieldValue::Null);
    fields
}

#[test]
fn test_null_without_nullable_fails_with_fixed_message() {
    let rules = RuleSetBuilder::new().field("name", "string").build();
    let validator = Validator::make(rules);

    let err = validator.validate(&null_field("name")).unwrap_err();
    assert_eq!(
        err,
        ValidationError::Field {
            field: "name".into(),
            message: "must not be null".into(),
        }
    );
}

#[test]
fn test_null_with_nullable_passes() {
    let rules = RuleSetBuilder::new().field("name", "nullable|string").build();
    let validator = Validator::make(rules);

    let result = validator.validate(&null_field("name"));
    assert!(result.is_ok(), "null with nullable should pass: {result:?}");
}

#[test]
fn test_nullable_overrides_every_other_failure() {
    // Each of these specs would fail on null; nullable wins in all of them.
    for spec in [
        "nullable|string|min:3",
        "nullable|integer|between:1,10",
        "nullable|email",
        "string|nullable",
    ] {
        let rules = RuleSetBuilder::new().field("value", spec).build();
        let validator = Validator::make(rules);

        let result = validator.validate(&null_field("value"));
        assert!(result.is_ok(), "spec {spec:?} rejected null: {result:?}");
    }
}

#[test]
fn test_null_overrides_passing_type_rule_reconciliation() {
    // `present` passes and no type rule fails, yet the null override
    // still rejects the field afterwards.
    let rules = RuleSetBuilder::new().field("name", "present").build();
    let validator = Validator::make(rules);

    let err = validator.validate(&null_field("name")).unwrap_err();
    assert_eq!(err.field(), Some("name"));
    assert_eq!(err.to_string(), "name must not be null");
}

#[test]
fn test_absent_field_differs_from_null_field() {
    let rules = RuleSetBuilder::new().field("age", "integer|min:16").build();
    let validator = Validator::make(rules);

    // Absent: every rule skips, field passes.
    assert!(validator.validate(&FieldMap::new()).is_ok());

    // Present null: the fixed null failure, not the integer failure.
    let err = validator.validate(&null_field("age")).unwrap_err();
    assert_eq!(err.to_string(), "age must not be null");
}

#[test]
fn test_required_still_rejects_absent_nullable_field() {
    // nullable only forgives explicit nulls; required still fires on a
    // missing field.
    let rules = RuleSetBuilder::new()
        .field("name", "required|nullable|string")
        .build();
    let validator = Validator::make(rules);

    let err = validator.validate(&FieldMap::new()).unwrap_err();
    assert_eq!(err.field(), Some("name"));

    // But an explicit null passes: the nullable override clears the
    // required failure too.
    assert!(validator.validate(&null_field("name")).is_ok());
}

#[test]
fn test_null_in_first_field_masks_later_fields() {
    let rules = RuleSetBuilder::new()
        .field("a", "string")
        .field("b", "integer")
        .build();
    let validator = Validator::make(rules);

    let mut fields = FieldMap::new();
    fields.insert("a", FieldValue::Null);
    fields.insert("b", "not an integer");

    let err = validator.validate(&fields).unwrap_err();
    assert_eq!(err.field(), Some("a"));
}
