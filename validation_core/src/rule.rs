//! The rule contract.
//!
//! Every predicate rule — built-in or user-supplied — implements the
//! [`Rule`] trait. Rules receive a [`FieldContext`] describing the field
//! under validation and answer with a tagged [`RuleOutcome`].

use crate::{FieldMap, FieldValue, UploadedFiles};

/// Placeholder replacements for a message template.
///
/// Pairs of placeholder token and replacement text, e.g.
/// `[("{0}", "16")]` for a template like `"must be at least {0}"`.
pub type MessageParams = Vec<(String, String)>;

/// The outcome of a single rule invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The directive is not applicable (typically because the field is
    /// absent); it has no effect on the field's state.
    Skip,
    /// The check passed.
    Pass,
    /// The check failed with a message key and placeholder replacements.
    Fail {
        /// Message key handed to the language resolver
        key: String,
        /// Placeholder replacements for the message template
        params: MessageParams,
    },
}

impl RuleOutcome {
    /// Creates a failure outcome with no placeholders.
    pub fn fail(key: impl Into<String>) -> Self {
        RuleOutcome::Fail {
            key: key.into(),
            params: Vec::new(),
        }
    }

    /// Creates a failure outcome with a single `{0}` placeholder.
    pub fn fail_with(key: impl Into<String>, value: impl Into<String>) -> Self {
        RuleOutcome::Fail {
            key: key.into(),
            params: vec![("{0}".to_string(), value.into())],
        }
    }

    /// Creates a failure outcome with explicit placeholder pairs.
    pub fn fail_with_params(key: impl Into<String>, params: MessageParams) -> Self {
        RuleOutcome::Fail {
            key: key.into(),
            params,
        }
    }

    /// Returns true if this outcome is a failure.
    pub fn is_fail(&self) -> bool {
        matches!(self, RuleOutcome::Fail { .. })
    }
}

/// Everything a rule sees about the field it is validating.
///
/// `exists` distinguishes a key absent from the input from a key present
/// with a null value; `value` is `Null` in both cases. `options` is the
/// opaque text after the first `:` of the directive, with rule-defined
/// syntax. `uploads` is the per-field upload metadata source consumed by
/// upload-aware rules.
#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    /// Name of the field under validation
    pub key: &'a str,
    /// Submitted value (`Null` when the field is absent)
    pub value: &'a FieldValue,
    /// Whether the key was present in the submitted data
    pub exists: bool,
    /// All submitted fields, for cross-field rules
    pub fields: &'a FieldMap,
    /// Directive options, verbatim
    pub options: Option<&'a str>,
    /// Uploaded-file metadata, keyed by field name
    pub uploads: &'a UploadedFiles,
}

impl<'a> FieldContext<'a> {
    /// Returns the directive options or an empty string.
    pub fn options_str(&self) -> &'a str {
        self.options.unwrap_or("")
    }

    /// Returns the successful upload for this field, if any.
    ///
    /// "Successful" means the entry reports the no-error sentinel and its
    /// temporary file still exists.
    pub fn upload(&self) -> Option<&'a crate::UploadedFile> {
        self.uploads
            .get(self.key)
            .filter(|u| u.is_ok() && u.tmp_exists())
    }
}

/// The contract every validation rule implements.
///
/// Implementations must be stateless with respect to individual
/// invocations: the same context always yields the same outcome. Rules
/// are shared across engine instances and threads.
///
/// # Example
///
/// ```rust
/// use validation_core::{FieldContext, Rule, RuleOutcome};
///
/// struct NonEmpty;
///
/// impl Rule for NonEmpty {
///     fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
///         if !ctx.exists {
///             return RuleOutcome::Skip;
///         }
///         match ctx.value.as_str() {
///             Some(s) if !s.is_empty() => RuleOutcome::Pass,
///             _ => RuleOutcome::fail("formvalidator_make_filled"),
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Validates the field described by `ctx`.
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome;
}
