//! Type assertions.
//!
//! All rules here except `numeric` are registered as type rules: several
//! of them on one field are OR-combined by the engine, so
//! `"integer|float"` accepts either shape.

use validation_core::{FieldContext, FieldValue, Rule, RuleOutcome};

/// Name: `string` - Type Rule
pub struct StringRule;

impl Rule for StringRule {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        if !ctx.exists {
            return RuleOutcome::Skip;
        }

        match ctx.value {
            FieldValue::String(_) => RuleOutcome::Pass,
            _ => RuleOutcome::fail("formvalidator_make_string"),
        }
    }
}

/// Name: `integer` - Type Rule
pub struct IntegerRule;

impl Rule for IntegerRule {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        if !ctx.exists {
            return RuleOutcome::Skip;
        }

        match ctx.value {
            FieldValue::Int(_) => RuleOutcome::Pass,
            _ => RuleOutcome::fail("formvalidator_make_integer"),
        }
    }
}

/// Name: `float` - Type Rule
///
/// Integers are not floats; `"integer|float"` accepts both shapes via
/// type-rule OR combination.
pub struct FloatRule;

impl Rule for FloatRule {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        if !ctx.exists {
            return RuleOutcome::Skip;
        }

        match ctx.value {
            FieldValue::Float(_) => RuleOutcome::Pass,
            _ => RuleOutcome::fail("formvalidator_make_float"),
        }
    }
}

/// Name: `boolean` - Type Rule
///
/// Accepts actual booleans plus the form encodings `0`, `1`, `"0"`,
/// `"1"`, `"true"` and `"false"`.
pub struct BooleanRule;

impl Rule for BooleanRule {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        if !ctx.exists {
            return RuleOutcome::Skip;
        }

        let ok = match ctx.value {
            FieldValue::Bool(_) => true,
            FieldValue::Int(i) => *i == 0 || *i == 1,
            FieldValue::String(s) => matches!(s.as_str(), "0" | "1" | "true" | "false"),
            _ => false,
        };

        if ok {
            RuleOutcome::Pass
        } else {
            RuleOutcome::fail("formvalidator_make_boolean")
        }
    }
}

/// Name: `numeric`
///
/// The field must be an integer, a float, or a numeric string. Not a
/// type rule; combine with `in`, `min`, etc. for range checks on string
/// form input.
pub struct Numeric;

impl Rule for Numeric {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        if !ctx.exists {
            return RuleOutcome::Skip;
        }

        if ctx.value.as_numeric().is_some() {
            RuleOutcome::Pass
        } else {
            RuleOutcome::fail("formvalidator_make_numeric")
        }
    }
}

/// Name: `array` - Type Rule
///
/// The field must be a list, or with `array:TYPE` a list whose elements
/// all have the given type (`string`, `integer`, `float`, `boolean`,
/// `array`, `map`).
pub struct ArrayRule;

impl Rule for ArrayRule {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        if !ctx.exists {
            return RuleOutcome::Skip;
        }

        let Some(items) = ctx.value.as_list() else {
            return RuleOutcome::fail("formvalidator_make_array");
        };

        let subtype = ctx.options_str();
        if !subtype.is_empty() {
            for item in items {
                if item.type_name() != subtype {
                    return RuleOutcome::fail_with(
                        "formvalidator_make_array_subtype",
                        subtype,
                    );
                }
            }
        }

        RuleOutcome::Pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testutil::{TestField, assert_fail, assert_pass, assert_skip};

    #[test]
    fn test_all_skip_when_absent() {
        let absent = TestField::absent();
        assert_skip(&StringRule, &absent);
        assert_skip(&IntegerRule, &absent);
        assert_skip(&FloatRule, &absent);
        assert_skip(&BooleanRule, &absent);
        assert_skip(&Numeric, &absent);
        assert_skip(&ArrayRule, &absent);
    }

    #[test]
    fn test_string() {
        assert_pass(&StringRule, &TestField::present("hello"));
        assert_fail(&StringRule, &TestField::present(5i64), "formvalidator_make_string");
    }

    #[test]
    fn test_integer() {
        assert_pass(&IntegerRule, &TestField::present(5i64));
        assert_fail(&IntegerRule, &TestField::present(5.0), "formvalidator_make_integer");
        assert_fail(&IntegerRule, &TestField::present("5"), "formvalidator_make_integer");
    }

    #[test]
    fn test_float_rejects_integers() {
        assert_pass(&FloatRule, &TestField::present(5.5));
        assert_fail(&FloatRule, &TestField::present(5i64), "formvalidator_make_float");
    }

    #[test]
    fn test_boolean_encodings() {
        for value in [
            FieldValue::Bool(true),
            FieldValue::Bool(false),
            FieldValue::Int(0),
            FieldValue::Int(1),
            FieldValue::String("0".into()),
            FieldValue::String("true".into()),
        ] {
            assert_pass(&BooleanRule, &TestField::present(value));
        }

        assert_fail(&BooleanRule, &TestField::present(2i64), "formvalidator_make_boolean");
        assert_fail(
            &BooleanRule,
            &TestField::present("yes"),
            "formvalidator_make_boolean",
        );
    }

    #[test]
    fn test_numeric() {
        assert_pass(&Numeric, &TestField::present(5i64));
        assert_pass(&Numeric, &TestField::present(5.5));
        assert_pass(&Numeric, &TestField::present("17"));
        assert_fail(&Numeric, &TestField::present("17a"), "formvalidator_make_numeric");
        assert_fail(
            &Numeric,
            &TestField::present(true),
            "formvalidator_make_numeric",
        );
    }

    #[test]
    fn test_array() {
        assert_pass(&ArrayRule, &TestField::present(vec![1i64, 2, 3]));
        assert_fail(&ArrayRule, &TestField::present("no"), "formvalidator_make_array");
    }

    #[test]
    fn test_array_subtype() {
        let ints = TestField::present(vec![1i64, 2, 3]).options("integer");
        assert_pass(&ArrayRule, &ints);

        let mixed = TestField::present(FieldValue::List(vec![
            FieldValue::Int(1),
            FieldValue::String("two".into()),
        ]))
        .options("integer");
        assert_fail(&ArrayRule, &mixed, "formvalidator_make_array_subtype");
    }
}
