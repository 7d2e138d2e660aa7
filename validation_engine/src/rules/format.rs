//! Format checks: addresses, encodings, dates and character classes.
//!
//! All rules here skip on absent fields and fail on non-string values,
//! since every format is defined over text.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use validation_core::{FieldContext, Rule, RuleOutcome};
use validator::{ValidateEmail, ValidateIp, ValidateUrl};

/// Name: `email`
///
/// The field must be a valid email address (syntactic check).
pub struct Email;

impl Rule for Email {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        if !ctx.exists {
            return RuleOutcome::Skip;
        }

        match ctx.value.as_str() {
            Some(s) if s.validate_email() => RuleOutcome::Pass,
            _ => RuleOutcome::fail("formvalidator_make_email"),
        }
    }
}

/// Name: `url`
///
/// The field must be a valid URL. No reachability probing is performed.
pub struct Url;

impl Rule for Url {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        if !ctx.exists {
            return RuleOutcome::Skip;
        }

        match ctx.value.as_str() {
            Some(s) if s.validate_url() => RuleOutcome::Pass,
            _ => RuleOutcome::fail("formvalidator_make_url"),
        }
    }
}

/// Name: `ip`
///
/// The field must be a valid IPv4 or IPv6 address.
pub struct Ip;

impl Rule for Ip {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        if !ctx.exists {
            return RuleOutcome::Skip;
        }

        match ctx.value.as_str() {
            Some(s) if s.validate_ip() => RuleOutcome::Pass,
            _ => RuleOutcome::fail("formvalidator_make_ip"),
        }
    }
}

/// Name: `json`
///
/// The field must be a string containing valid JSON.
pub struct Json;

impl Rule for Json {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        if !ctx.exists {
            return RuleOutcome::Skip;
        }

        let parses = ctx
            .value
            .as_str()
            .is_some_and(|s| serde_json::from_str::<serde_json::Value>(s).is_ok());

        if parses {
            RuleOutcome::Pass
        } else {
            RuleOutcome::fail("formvalidator_make_json")
        }
    }
}

/// Name: `regex`
///
/// The field must match the pattern given in the options. Both bare
/// patterns (`regex:^\d+$`) and delimited patterns with flags
/// (`regex:/^\d+$/i`) are accepted; the flags `i`, `m`, `s` and `x`
/// become inline flag groups. Usage: `regex:PATTERN`
pub struct RegexRule;

/// Unwraps an optional `/pattern/flags` delimiter form into a pattern
/// the `regex` crate accepts.
fn unwrap_delimited(options: &str) -> Option<String> {
    let rest = options.strip_prefix('/')?;
    let end = rest.rfind('/')?;
    let (pattern, flags) = rest.split_at(end);
    let flags: String = flags[1..]
        .chars()
        .filter(|c| matches!(c, 'i' | 'm' | 's' | 'x'))
        .collect();

    if flags.is_empty() {
        Some(pattern.to_string())
    } else {
        Some(format!("(?{flags}){pattern}"))
    }
}

impl Rule for RegexRule {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        if !ctx.exists {
            return RuleOutcome::Skip;
        }

        let options = ctx.options_str();
        let pattern = unwrap_delimited(options).unwrap_or_else(|| options.to_string());

        let Ok(regex) = Regex::new(&pattern) else {
            return RuleOutcome::fail("formvalidator_make_regex");
        };

        match ctx.value.as_str() {
            Some(s) if regex.is_match(s) => RuleOutcome::Pass,
            _ => RuleOutcome::fail("formvalidator_make_regex"),
        }
    }
}

/// Parses the date/time formats accepted by the `date`, `before` and
/// `after` rules: RFC 3339, `Y-m-d H:M:S`, `Y-m-d`, and bare times
/// (anchored to day zero).
pub(crate) fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    for fmt in ["%H:%M:%S", "%H:%M"] {
        if let Ok(t) = NaiveTime::parse_from_str(s, fmt) {
            return NaiveDate::from_ymd_opt(1970, 1, 1).map(|d| d.and_time(t));
        }
    }
    None
}

/// Name: `date`
///
/// The field must parse as a date or time.
pub struct Date;

impl Rule for Date {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        if !ctx.exists {
            return RuleOutcome::Skip;
        }

        let ok = ctx
            .value
            .as_str()
            .is_some_and(|s| parse_datetime(s).is_some());

        if ok {
            RuleOutcome::Pass
        } else {
            RuleOutcome::fail("formvalidator_make_date")
        }
    }
}

/// Name: `dateformat`
///
/// The field must be a date in the given strftime format.
/// Usage: `dateformat:%d.%m.%Y`
pub struct DateFormat;

impl Rule for DateFormat {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        if !ctx.exists {
            return RuleOutcome::Skip;
        }

        let format = ctx.options_str();
        let ok = ctx.value.as_str().is_some_and(|s| {
            NaiveDateTime::parse_from_str(s, format).is_ok()
                || NaiveDate::parse_from_str(s, format).is_ok()
                || NaiveTime::parse_from_str(s, format).is_ok()
        });

        if ok {
            RuleOutcome::Pass
        } else {
            RuleOutcome::fail_with("formvalidator_make_date_format", format)
        }
    }
}

/// A character-class rule: the field is a string and contains no
/// character matched by the forbidden class.
fn class_check(
    ctx: &FieldContext<'_>,
    forbidden: &Regex,
    key: &'static str,
) -> RuleOutcome {
    if !ctx.exists {
        return RuleOutcome::Skip;
    }

    match ctx.value.as_str() {
        Some(s) if !forbidden.is_match(s) => RuleOutcome::Pass,
        _ => RuleOutcome::fail(key),
    }
}

/// Name: `alpha`
///
/// The field must contain only alphabetic characters.
pub struct Alpha;

impl Rule for Alpha {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        static FORBIDDEN: OnceLock<Regex> = OnceLock::new();
        let forbidden = FORBIDDEN.get_or_init(|| Regex::new(r"[^A-Za-z]").unwrap());
        class_check(ctx, forbidden, "formvalidator_make_alpha")
    }
}

/// Name: `alphadash`
///
/// The field must contain only alphabetic characters, dashes and
/// underscores.
pub struct AlphaDash;

impl Rule for AlphaDash {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        static FORBIDDEN: OnceLock<Regex> = OnceLock::new();
        let forbidden = FORBIDDEN.get_or_init(|| Regex::new(r"[^A-Za-z\-_]").unwrap());
        class_check(ctx, forbidden, "formvalidator_make_alpha_dash")
    }
}

/// Name: `alphanum`
///
/// The field must contain only alphanumeric characters.
pub struct AlphaNum;

impl Rule for AlphaNum {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        static FORBIDDEN: OnceLock<Regex> = OnceLock::new();
        let forbidden = FORBIDDEN.get_or_init(|| Regex::new(r"[^A-Za-z0-9]").unwrap());
        class_check(ctx, forbidden, "formvalidator_make_alpha_num")
    }
}

/// Name: `nowhitespace`
///
/// The field must not contain whitespace.
pub struct NoWhitespace;

impl Rule for NoWhitespace {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        static FORBIDDEN: OnceLock<Regex> = OnceLock::new();
        let forbidden = FORBIDDEN.get_or_init(|| Regex::new(r"\s").unwrap());
        class_check(ctx, forbidden, "formvalidator_make_nowhitespace")
    }
}

/// Name: `uppercase`
///
/// The field must be all uppercase.
pub struct Uppercase;

impl Rule for Uppercase {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        if !ctx.exists {
            return RuleOutcome::Skip;
        }

        match ctx.value.as_str() {
            Some(s) if s.to_uppercase() == s => RuleOutcome::Pass,
            _ => RuleOutcome::fail("formvalidator_make_uppercase"),
        }
    }
}

/// Name: `lowercase`
///
/// The field must be all lowercase.
pub struct Lowercase;

impl Rule for Lowercase {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        if !ctx.exists {
            return RuleOutcome::Skip;
        }

        match ctx.value.as_str() {
            Some(s) if s.to_lowercase() == s => RuleOutcome::Pass,
            _ => RuleOutcome::fail("formvalidator_make_lowercase"),
        }
    }
}
