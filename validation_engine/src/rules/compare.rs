//! Comparative checks: sizes, ranges, cross-field equality, time order.
//!
//! `min`, `max`, `size` and `between` share one measurement: upload size
//! in KiB when a successful upload exists for the field, element count
//! for collections, the numeric value for numbers and numeric strings,
//! and the character count for other strings.

use validation_core::{FieldContext, FieldValue, Rule, RuleOutcome};

use crate::rules::format::parse_datetime;

/// The measured quantity of a field for size comparisons.
///
/// `None` means the directive is not applicable (field absent and no
/// upload).
fn measure(ctx: &FieldContext<'_>) -> Option<f64> {
    if let Some(upload) = ctx.upload() {
        return Some(upload.size_kib().unwrap_or(0) as f64);
    }

    if !ctx.exists {
        return None;
    }

    let measured = match ctx.value {
        FieldValue::List(items) => items.len() as f64,
        FieldValue::Map(map) => map.len() as f64,
        FieldValue::Bool(b) => *b as i64 as f64,
        FieldValue::Null => 0.0,
        other => match other.as_numeric() {
            Some(n) => n,
            None => other.as_str().map_or(0.0, |s| s.chars().count() as f64),
        },
    };
    Some(measured)
}

/// Picks the string-flavored message for string values, matching how
/// "at least 6" reads differently for numbers and text.
fn sized_key(value: &FieldValue, numeric_key: &'static str, string_key: &'static str) -> &'static str {
    if matches!(value, FieldValue::String(_)) {
        string_key
    } else {
        numeric_key
    }
}

/// Name: `min`
///
/// The field must be/have:
///   - numeric: equal/greater than the specified value
///   - file: upload size equal/greater than the specified value (in KiB)
///   - array: equal/more elements than the specified value
///   - string: equal/more characters than the specified value
///
/// Usage: `min:VALUE`
pub struct Min;

impl Rule for Min {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        let Some(measured) = measure(ctx) else {
            return RuleOutcome::Skip;
        };
        let options = ctx.options_str();
        let Ok(bound) = options.parse::<f64>() else {
            return RuleOutcome::fail_with("formvalidator_make_min", options);
        };

        if measured < bound {
            let key = sized_key(ctx.value, "formvalidator_make_min", "formvalidator_make_min_string");
            return RuleOutcome::fail_with(key, options);
        }

        RuleOutcome::Pass
    }
}

/// Name: `max`
///
/// The field must be/have:
///   - numeric: equal/smaller than the specified value
///   - file: upload size equal/smaller than the specified value (in KiB)
///   - array: equal/fewer elements than the specified value
///   - string: equal/fewer characters than the specified value
///
/// Usage: `max:VALUE`
pub struct Max;

impl Rule for Max {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        let Some(measured) = measure(ctx) else {
            return RuleOutcome::Skip;
        };
        let options = ctx.options_str();
        let Ok(bound) = options.parse::<f64>() else {
            return RuleOutcome::fail_with("formvalidator_make_max", options);
        };

        if measured > bound {
            let key = sized_key(ctx.value, "formvalidator_make_max", "formvalidator_make_max_string");
            return RuleOutcome::fail_with(key, options);
        }

        RuleOutcome::Pass
    }
}

/// Name: `size`
///
/// The measured quantity must equal the specified value exactly.
/// Usage: `size:VALUE`
pub struct Size;

impl Rule for Size {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        let Some(measured) = measure(ctx) else {
            return RuleOutcome::Skip;
        };
        let options = ctx.options_str();

        match options.parse::<f64>() {
            Ok(expected) if measured == expected => RuleOutcome::Pass,
            _ => RuleOutcome::fail_with("formvalidator_make_size", options),
        }
    }
}

/// Name: `between`
///
/// The measured quantity must lie between the two options, inclusive.
/// Usage: `between:VALUE_MIN,VALUE_MAX`
pub struct Between;

impl Rule for Between {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        let Some(measured) = measure(ctx) else {
            return RuleOutcome::Skip;
        };
        let options = ctx.options_str();

        let bounds = options.split_once(',').and_then(|(lo, hi)| {
            Some((lo.trim().parse::<f64>().ok()?, hi.trim().parse::<f64>().ok()?))
        });

        let fail = || {
            let (lo, hi) = options.split_once(',').unwrap_or((options, ""));
            RuleOutcome::fail_with_params(
                "formvalidator_make_between",
                vec![
                    ("{0}".to_string(), lo.trim().to_string()),
                    ("{1}".to_string(), hi.trim().to_string()),
                ],
            )
        };

        match bounds {
            Some((lo, hi)) if lo <= measured && measured <= hi => RuleOutcome::Pass,
            _ => fail(),
        }
    }
}

/// Name: `same`
///
/// The field must have the same value as the named sibling field.
/// Usage: `same:FIELD`
pub struct Same;

impl Rule for Same {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        if !ctx.exists {
            return RuleOutcome::Skip;
        }

        let other = ctx.options_str();
        if ctx.fields.get(other) == Some(ctx.value) {
            RuleOutcome::Pass
        } else {
            RuleOutcome::fail_with("formvalidator_make_same", other)
        }
    }
}

/// Name: `different`
///
/// The field must not have the same value as the named sibling field.
/// Usage: `different:FIELD`
pub struct Different;

impl Rule for Different {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        if !ctx.exists {
            return RuleOutcome::Skip;
        }

        let other = ctx.options_str();
        if ctx.fields.get(other) == Some(ctx.value) {
            RuleOutcome::fail_with("formvalidator_make_different", other)
        } else {
            RuleOutcome::Pass
        }
    }
}

/// Name: `in`
///
/// The field must be one of the specified values (comma separated).
/// Usage: `in:VALUE_1,VALUE_2,...`
pub struct In;

impl Rule for In {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        if !ctx.exists {
            return RuleOutcome::Skip;
        }

        let options = ctx.options_str();
        let matched = ctx
            .value
            .to_option_string()
            .is_some_and(|rendered| options.split(',').any(|candidate| candidate == rendered));

        if matched {
            RuleOutcome::Pass
        } else {
            RuleOutcome::fail_with("formvalidator_make_in", options)
        }
    }
}

/// Name: `before`
///
/// The field must be a time at or before the specified value.
/// Usage: `before:VALUE`
pub struct Before;

impl Rule for Before {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        if !ctx.exists {
            return RuleOutcome::Skip;
        }

        let options = ctx.options_str();
        let bound = parse_datetime(options);
        let value = ctx.value.as_str().and_then(parse_datetime);

        match (value, bound) {
            (Some(value), Some(bound)) if value <= bound => RuleOutcome::Pass,
            _ => RuleOutcome::fail_with("formvalidator_make_before", options),
        }
    }
}

/// Name: `after`
///
/// The field must be a time at or after the specified value.
/// Usage: `after:VALUE`
pub struct After;

impl Rule for After {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        if !ctx.exists {
            return RuleOutcome::Skip;
        }

        let options = ctx.options_str();
        let bound = parse_datetime(options);
        let value = ctx.value.as_str().and_then(parse_datetime);

        match (value, bound) {
            (Some(value), Some(bound)) if value >= bound => RuleOutcome::Pass,
            _ => RuleOutcome::fail_with("formvalidator_make_after", options),
        }
    }
}

/// Name: `confirmed`
///
/// The fields must contain another field named `KEY_SUFFIX` with the
/// same value; the suffix defaults to `confirmation`.
/// Usage: `confirmed` or `confirmed:SUFFIX`
pub struct Confirmed;

impl Rule for Confirmed {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        if !ctx.exists {
            return RuleOutcome::Skip;
        }

        let suffix = match ctx.options {
            Some(options) if !options.is_empty() => options,
            _ => "confirmation",
        };
        let other = format!("{}_{}", ctx.key, suffix);

        if ctx.fields.get(&other) == Some(ctx.value) {
            RuleOutcome::Pass
        } else {
            RuleOutcome::fail("formvalidator_make_confirmed")
        }
    }
}

/// Name: `accepted`
///
/// The field must be accepted: `yes`, `on`, `1` or `true`.
pub struct Accepted;

impl Rule for Accepted {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        if !ctx.exists {
            return RuleOutcome::Skip;
        }

        let accepted = match ctx.value {
            FieldValue::Bool(b) => *b,
            FieldValue::Int(i) => *i == 1,
            FieldValue::String(s) => matches!(s.as_str(), "yes" | "on" | "1" | "true"),
            _ => false,
        };

        if accepted {
            RuleOutcome::Pass
        } else {
            RuleOutcome::fail("formvalidator_make_accepted")
        }
    }
}

/// Name: `digits`
///
/// The field must be an integer or digit string with exactly the
/// specified number of digits. Usage: `digits:COUNT`
pub struct Digits;

impl Rule for Digits {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        if !ctx.exists {
            return RuleOutcome::Skip;
        }

        let options = ctx.options_str();
        let Ok(expected) = options.parse::<usize>() else {
            return RuleOutcome::fail_with("formvalidator_make_digits", options);
        };

        let digits = match ctx.value {
            FieldValue::Int(i) => Some(i.unsigned_abs().to_string()),
            FieldValue::String(s) if s.chars().all(|c| c.is_ascii_digit()) && !s.is_empty() => {
                Some(s.clone())
            }
            _ => None,
        };

        match digits {
            Some(digits) if digits.len() == expected => RuleOutcome::Pass,
            _ => RuleOutcome::fail_with("formvalidator_make_digits", options),
        }
    }
}
