//! The validation engine.
//!
//! Orchestrates, per declared field: existence lookup, directive
//! dispatch through the rule registry, type-rule reconciliation,
//! nullable reconciliation, and fail-fast error surfacing; then strict
//! mode scans for undeclared input fields.

use std::sync::Arc;

use tracing::{debug, trace};
use validation_core::{
    EnglishLanguage, FieldContext, FieldMap, FieldValue, Language, RuleOutcome, RuleSet,
    UploadedFiles,
};
use validation_parser::parse_spec;

use crate::{RuleRegistry, ValidationError, ValidationResult};

const NULL_VALUE: FieldValue = FieldValue::Null;

/// The validation engine.
///
/// Configured once with a rule set, a strict flag, a rule registry and a
/// language; immutable afterwards and safe to share across threads for
/// concurrent `validate` calls. Validation is synchronous and produces
/// no side effects beyond reading its inputs.
///
/// # Example
///
/// ```rust
/// use validation_core::{FieldMap, RuleSetBuilder};
/// use validation_engine::Validator;
///
/// let rules = RuleSetBuilder::new()
///     .field("email", "required|email")
///     .build();
/// let validator = Validator::make(rules).with_strict(true);
///
/// let mut fields = FieldMap::new();
/// fields.insert("email", "charlie@example.com");
///
/// assert!(validator.validate(&fields).is_ok());
/// ```
pub struct Validator {
    rules: RuleSet,
    strict: bool,
    registry: Arc<RuleRegistry>,
    lang: Arc<dyn Language>,
}

impl Validator {
    /// Creates a validator for a rule set with the default configuration:
    /// non-strict, the shared built-in registry, English messages.
    pub fn make(rules: RuleSet) -> Self {
        Self {
            rules,
            strict: false,
            registry: RuleRegistry::shared(),
            lang: Arc::new(EnglishLanguage::new()),
        }
    }

    /// Sets whether undeclared input fields make validation fail.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Replaces the rule registry.
    pub fn with_registry(mut self, registry: Arc<RuleRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Replaces the message language.
    pub fn with_language(mut self, lang: Arc<dyn Language>) -> Self {
        self.lang = lang;
        self
    }

    /// Validates submitted fields with no uploads.
    ///
    /// See [`Validator::validate_with_uploads`].
    pub fn validate(&self, fields: &FieldMap) -> ValidationResult {
        self.validate_with_uploads(fields, &UploadedFiles::new())
    }

    /// Validates submitted fields against the configured rule set.
    ///
    /// Fields are evaluated in declaration order; the call stops at the
    /// first field with an outstanding error after reconciliation, at
    /// the first directive naming an unregistered rule, or — in strict
    /// mode, once every declared field passed — at the first input field
    /// without declared rules, in input order.
    pub fn validate_with_uploads(
        &self,
        fields: &FieldMap,
        uploads: &UploadedFiles,
    ) -> ValidationResult {
        let mut remaining: Vec<&str> = fields.keys().collect();

        for field_rules in self.rules.iter() {
            let key = field_rules.field.as_str();
            let exists = fields.contains_key(key);
            let value = fields.get(key).unwrap_or(&NULL_VALUE);
            remaining.retain(|k| *k != key);

            let spec = parse_spec(&field_rules.spec);
            trace!(field = key, directives = spec.directives.len(), "evaluating field");

            let mut error: Option<String> = None;
            let mut passed_type_rule = false;
            let mut failed_other_rule = false;

            for directive in &spec.directives {
                let Some(entry) = self.registry.lookup(&directive.name) else {
                    return Err(ValidationError::UnknownRule(directive.name.clone()));
                };

                let ctx = FieldContext {
                    key,
                    value,
                    exists,
                    fields,
                    options: directive.options.as_deref(),
                    uploads,
                };

                match entry.rule.check(&ctx) {
                    RuleOutcome::Skip => {}
                    RuleOutcome::Pass => {
                        if entry.type_rule {
                            passed_type_rule = true;
                        }
                    }
                    RuleOutcome::Fail { key: msg_key, params } => {
                        error = Some(self.lang.translation(&msg_key, &params));
                        if !entry.type_rule {
                            failed_other_rule = true;
                        }
                    }
                }
            }

            // Type rules are non-exclusive: one passing assertion forgives
            // the others, as long as no non-type rule failed.
            if passed_type_rule && !failed_other_rule {
                error = None;
            }

            // An explicit null overrides everything above: always invalid
            // without `nullable`, always valid with it.
            if exists && value.is_null() {
                if !spec.nullable {
                    error = Some(
                        self.lang
                            .translation("formvalidator_make_nullable", &Vec::new()),
                    );
                } else {
                    error = None;
                }
            }

            if let Some(message) = error {
                debug!(field = key, %message, "field failed validation");
                return Err(ValidationError::Field {
                    field: key.to_string(),
                    message,
                });
            }
        }

        if self.strict {
            if let Some(key) = remaining.into_iter().next() {
                debug!(field = key, "undeclared field in strict mode");
                return Err(ValidationError::UnknownField(key.to_string()));
            }
        }

        Ok(())
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("fields", &self.rules.len())
            .field("strict", &self.strict)
            .field("registry", &self.registry)
            .finish()
    }
}
