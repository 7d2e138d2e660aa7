//! Existence checks: `required`, `filled`, `present`.
//!
//! These rules never skip on an absent field — absence is exactly what
//! they reject.

use validation_core::{FieldContext, FieldValue, Rule, RuleOutcome};

/// Returns true for values form handling considers empty: null, blank
/// or zero-like scalars, and empty collections.
fn is_empty_value(value: &FieldValue) -> bool {
    match value {
        FieldValue::Null => true,
        FieldValue::String(s) => s.is_empty() || s == "0",
        FieldValue::Int(i) => *i == 0,
        FieldValue::Float(f) => *f == 0.0,
        FieldValue::Bool(b) => !b,
        FieldValue::List(items) => items.is_empty(),
        FieldValue::Map(map) => map.is_empty(),
    }
}

/// Name: `required`
///
/// The field must be present with a non-null, non-blank value — or have
/// a successful upload under the same name.
pub struct Required;

impl Rule for Required {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        let blank = !ctx.exists
            || ctx.value.is_null()
            || ctx.value.as_str().is_some_and(|s| s.trim().is_empty());

        let uploaded = ctx.uploads.get(ctx.key).is_some_and(|u| u.is_ok());

        if blank && !uploaded {
            return RuleOutcome::fail("formvalidator_make_required");
        }

        RuleOutcome::Pass
    }
}

/// Name: `filled`
///
/// The field must be present and not empty.
pub struct Filled;

impl Rule for Filled {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        if !ctx.exists || is_empty_value(ctx.value) {
            return RuleOutcome::fail("formvalidator_make_filled");
        }

        RuleOutcome::Pass
    }
}

/// Name: `present`
///
/// The field key must be present in the input; its value is irrelevant.
pub struct Present;

impl Rule for Present {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        if !ctx.exists {
            return RuleOutcome::fail("formvalidator_make_present");
        }

        RuleOutcome::Pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testutil::{TestField, assert_fail, assert_pass};
    use validation_core::UploadedFile;

    #[test]
    fn test_required_present_value() {
        assert_pass(&Required, &TestField::present("hello"));
        assert_pass(&Required, &TestField::present(0i64));
    }

    #[test]
    fn test_required_rejects_absent_null_and_blank() {
        assert_fail(&Required, &TestField::absent(), "formvalidator_make_required");
        assert_fail(
            &Required,
            &TestField::present(FieldValue::Null),
            "formvalidator_make_required",
        );
        assert_fail(
            &Required,
            &TestField::present("   "),
            "formvalidator_make_required",
        );
    }

    #[test]
    fn test_required_satisfied_by_successful_upload() {
        let field = TestField::absent().upload(UploadedFile::new("/tmp/any"));
        assert_pass(&Required, &field);
    }

    #[test]
    fn test_required_not_satisfied_by_failed_upload() {
        let field = TestField::absent().upload(UploadedFile::with_error("/tmp/any", 4));
        assert_fail(&Required, &field, "formvalidator_make_required");
    }

    #[test]
    fn test_filled() {
        assert_pass(&Filled, &TestField::present("hello"));
        assert_pass(&Filled, &TestField::present(5i64));

        assert_fail(&Filled, &TestField::absent(), "formvalidator_make_filled");
        assert_fail(&Filled, &TestField::present(""), "formvalidator_make_filled");
        assert_fail(&Filled, &TestField::present(0i64), "formvalidator_make_filled");
        assert_fail(&Filled, &TestField::present(false), "formvalidator_make_filled");
        assert_fail(
            &Filled,
            &TestField::present(FieldValue::List(vec![])),
            "formvalidator_make_filled",
        );
    }

    #[test]
    fn test_present_ignores_value() {
        assert_pass(&Present, &TestField::present(FieldValue::Null));
        assert_pass(&Present, &TestField::present(""));
        assert_fail(&Present, &TestField::absent(), "formvalidator_make_present");
    }
}
