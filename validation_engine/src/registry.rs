//! The rule registry.
//!
//! Maps rule names to their implementations and records which names are
//! type rules. Built once, read-mostly thereafter: registration happens
//! at startup, after which the registry is shared read-only across
//! engine instances and threads.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use validation_core::Rule;

use crate::rules;

/// A registered rule implementation with its classification.
#[derive(Clone)]
pub struct RegisteredRule {
    /// The rule implementation
    pub rule: Arc<dyn Rule>,

    /// Whether this rule is a type assertion. Type rules on one field
    /// are non-exclusive: any one passing forgives the others' failures.
    pub type_rule: bool,
}

/// Registry of validation rules, keyed by exact name.
///
/// Names are matched exactly; case conventions are a registration-time
/// choice. Re-registering an existing name overwrites it — last writer
/// wins, deliberately, so hosts can replace built-ins. The reserved
/// `nullable` token is handled by the directive parser and is never
/// registered here.
///
/// # Example
///
/// ```rust
/// use validation_core::{FieldContext, Rule, RuleOutcome};
/// use validation_engine::RuleRegistry;
///
/// struct AlwaysPass;
///
/// impl Rule for AlwaysPass {
///     fn check(&self, _ctx: &FieldContext<'_>) -> RuleOutcome {
///         RuleOutcome::Pass
///     }
/// }
///
/// let mut registry = RuleRegistry::builtin();
/// registry.register("anything", false, AlwaysPass);
/// assert!(registry.lookup("anything").is_some());
/// assert!(registry.is_type_rule("integer"));
/// ```
#[derive(Clone, Default)]
pub struct RuleRegistry {
    entries: HashMap<String, RegisteredRule>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry populated with the built-in rule catalog.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        rules::register_builtins(&mut registry);
        registry
    }

    /// Registers a rule under `name`, overwriting any existing entry.
    ///
    /// `type_rule` classifies the rule as a type assertion; the engine
    /// never infers this from the name.
    pub fn register(&mut self, name: impl Into<String>, type_rule: bool, rule: impl Rule + 'static) {
        self.entries.insert(
            name.into(),
            RegisteredRule {
                rule: Arc::new(rule),
                type_rule,
            },
        );
    }

    /// Looks up a rule by exact name.
    pub fn lookup(&self, name: &str) -> Option<&RegisteredRule> {
        self.entries.get(name)
    }

    /// Returns true if `name` is registered as a type rule.
    pub fn is_type_rule(&self, name: &str) -> bool {
        self.entries.get(name).is_some_and(|e| e.type_rule)
    }

    /// Returns the number of registered rules.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the shared default registry with the built-in catalog.
    ///
    /// Initialized once before first use and shared read-only afterwards.
    /// Engines needing a modified catalog build their own registry and
    /// pass it via `Validator::with_registry`.
    pub fn shared() -> Arc<RuleRegistry> {
        static DEFAULT: OnceLock<Arc<RuleRegistry>> = OnceLock::new();
        DEFAULT.get_or_init(|| Arc::new(RuleRegistry::builtin())).clone()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validation_core::{FieldContext, RuleOutcome};

    struct AlwaysFail;

    impl Rule for AlwaysFail {
        fn check(&self, _ctx: &FieldContext<'_>) -> RuleOutcome {
            RuleOutcome::fail("always_fail")
        }
    }

    struct AlwaysPass;

    impl Rule for AlwaysPass {
        fn check(&self, _ctx: &FieldContext<'_>) -> RuleOutcome {
            RuleOutcome::Pass
        }
    }

    #[test]
    fn test_builtin_catalog_registered() {
        let registry = RuleRegistry::builtin();

        for name in [
            "required", "filled", "present", "string", "integer", "float", "boolean",
            "numeric", "array", "email", "url", "ip", "json", "regex", "date",
            "dateformat", "alpha", "alphadash", "alphanum", "uppercase", "lowercase",
            "nowhitespace", "min", "max", "size", "between", "same", "different", "in",
            "before", "after", "confirmed", "accepted", "digits", "distinct", "file",
            "image", "dimensions", "mimetypes",
        ] {
            assert!(registry.lookup(name).is_some(), "missing builtin {name:?}");
        }
    }

    #[test]
    fn test_nullable_never_registered() {
        let registry = RuleRegistry::builtin();
        assert!(registry.lookup("nullable").is_none());
    }

    #[test]
    fn test_type_rule_classification() {
        let registry = RuleRegistry::builtin();

        for name in ["string", "integer", "float", "boolean", "array", "file", "image"] {
            assert!(registry.is_type_rule(name), "{name:?} should be a type rule");
        }
        for name in ["required", "min", "email", "numeric", "distinct"] {
            assert!(!registry.is_type_rule(name), "{name:?} should not be a type rule");
        }
    }

    #[test]
    fn test_unknown_name_is_not_type_rule() {
        let registry = RuleRegistry::builtin();
        assert!(!registry.is_type_rule("no_such_rule"));
    }

    #[test]
    fn test_overwrite_on_reregistration() {
        let mut registry = RuleRegistry::new();
        registry.register("custom", false, AlwaysFail);
        assert!(!registry.is_type_rule("custom"));

        registry.register("custom", true, AlwaysPass);
        assert!(registry.is_type_rule("custom"));
        assert_eq!(registry.len(), 1);

        let fields = validation_core::FieldMap::new();
        let uploads = validation_core::UploadedFiles::new();
        let value = validation_core::FieldValue::Null;
        let ctx = FieldContext {
            key: "x",
            value: &value,
            exists: false,
            fields: &fields,
            options: None,
            uploads: &uploads,
        };
        let entry = registry.lookup("custom").unwrap();
        assert_eq!(entry.rule.check(&ctx), RuleOutcome::Pass);
    }

    #[test]
    fn test_shared_default_is_singleton() {
        let a = RuleRegistry::shared();
        let b = RuleRegistry::shared();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
