//! The built-in rule catalog.
//!
//! Every rule is an independent unit struct implementing
//! [`validation_core::Rule`]. Rules are grouped by concern:
//!
//! - [`existence`] — `required`, `filled`, `present`
//! - [`types`] — the non-exclusive type assertions plus `numeric`
//! - [`format`] — email/url/ip, json, regex, dates, character classes
//! - [`compare`] — min/max/size/between, cross-field and list checks
//! - [`structure`] — `distinct`
//! - [`upload`] — `file`, `image`, `dimensions`, `mimetypes`

pub mod compare;
pub mod existence;
pub mod format;
pub mod structure;
pub mod types;
pub mod upload;

use crate::RuleRegistry;

/// Registers the complete built-in catalog into `registry`.
///
/// Type rules carry `type_rule = true`; everything else is an ordinary
/// predicate. `nullable` is a parser-level sentinel and is deliberately
/// not registered.
pub fn register_builtins(registry: &mut RuleRegistry) {
    registry.register("required", false, existence::Required);
    registry.register("filled", false, existence::Filled);
    registry.register("present", false, existence::Present);

    registry.register("string", true, types::StringRule);
    registry.register("integer", true, types::IntegerRule);
    registry.register("float", true, types::FloatRule);
    registry.register("boolean", true, types::BooleanRule);
    registry.register("array", true, types::ArrayRule);
    registry.register("numeric", false, types::Numeric);

    registry.register("email", false, format::Email);
    registry.register("url", false, format::Url);
    registry.register("ip", false, format::Ip);
    registry.register("json", false, format::Json);
    registry.register("regex", false, format::RegexRule);
    registry.register("date", false, format::Date);
    registry.register("dateformat", false, format::DateFormat);
    registry.register("alpha", false, format::Alpha);
    registry.register("alphadash", false, format::AlphaDash);
    registry.register("alphanum", false, format::AlphaNum);
    registry.register("uppercase", false, format::Uppercase);
    registry.register("lowercase", false, format::Lowercase);
    registry.register("nowhitespace", false, format::NoWhitespace);

    registry.register("min", false, compare::Min);
    registry.register("max", false, compare::Max);
    registry.register("size", false, compare::Size);
    registry.register("between", false, compare::Between);
    registry.register("same", false, compare::Same);
    registry.register("different", false, compare::Different);
    registry.register("in", false, compare::In);
    registry.register("before", false, compare::Before);
    registry.register("after", false, compare::After);
    registry.register("confirmed", false, compare::Confirmed);
    registry.register("accepted", false, compare::Accepted);
    registry.register("digits", false, compare::Digits);

    registry.register("distinct", false, structure::Distinct);

    registry.register("file", true, upload::File);
    registry.register("image", true, upload::Image);
    registry.register("dimensions", false, upload::Dimensions);
    registry.register("mimetypes", false, upload::MimeTypes);
}

#[cfg(test)]
pub(crate) mod testutil {
    use validation_core::{
        FieldContext, FieldMap, FieldValue, Rule, RuleOutcome, UploadedFile, UploadedFiles,
    };

    /// Builds one field under validation, with optional sibling fields,
    /// directive options and uploads.
    pub(crate) struct TestField {
        pub key: String,
        pub value: FieldValue,
        pub exists: bool,
        pub fields: FieldMap,
        pub options: Option<String>,
        pub uploads: UploadedFiles,
    }

    impl TestField {
        /// A field named `test` present with the given value.
        pub(crate) fn present(value: impl Into<FieldValue>) -> Self {
            let value = value.into();
            let mut fields = FieldMap::new();
            fields.insert("test", value.clone());
            Self {
                key: "test".to_string(),
                value,
                exists: true,
                fields,
                options: None,
                uploads: UploadedFiles::new(),
            }
        }

        /// A field named `test` absent from the input.
        pub(crate) fn absent() -> Self {
            Self {
                key: "test".to_string(),
                value: FieldValue::Null,
                exists: false,
                fields: FieldMap::new(),
                options: None,
                uploads: UploadedFiles::new(),
            }
        }

        pub(crate) fn options(mut self, options: &str) -> Self {
            self.options = Some(options.to_string());
            self
        }

        /// Adds a sibling field to the submitted data.
        pub(crate) fn sibling(mut self, key: &str, value: impl Into<FieldValue>) -> Self {
            self.fields.insert(key, value);
            self
        }

        /// Registers an upload for the field under validation.
        pub(crate) fn upload(mut self, file: UploadedFile) -> Self {
            self.uploads.insert(self.key.clone(), file);
            self
        }

        pub(crate) fn check(&self, rule: &dyn Rule) -> RuleOutcome {
            rule.check(&FieldContext {
                key: &self.key,
                value: &self.value,
                exists: self.exists,
                fields: &self.fields,
                options: self.options.as_deref(),
                uploads: &self.uploads,
            })
        }
    }

    pub(crate) fn assert_pass(rule: &dyn Rule, field: &TestField) {
        assert_eq!(field.check(rule), RuleOutcome::Pass);
    }

    pub(crate) fn assert_skip(rule: &dyn Rule, field: &TestField) {
        assert_eq!(field.check(rule), RuleOutcome::Skip);
    }

    pub(crate) fn assert_fail(rule: &dyn Rule, field: &TestField, expected_key: &str) {
        match field.check(rule) {
            RuleOutcome::Fail { key, .. } => assert_eq!(key, expected_key),
            other => panic!("expected failure with key {expected_key:?}, got {other:?}"),
        }
    }
}
