//! Structural checks.

use validation_core::{FieldContext, Rule, RuleOutcome};

/// Name: `distinct`
///
/// The field must be an array without duplicate elements.
pub struct Distinct;

impl Rule for Distinct {
    fn check(&self, ctx: &FieldContext<'_>) -> RuleOutcome {
        if !ctx.exists {
            return RuleOutcome::Skip;
        }

        let Some(items) = ctx.value.as_list() else {
            return RuleOutcome::fail("formvalidator_make_distinct");
        };

        for (i, item) in items.iter().enumerate() {
            if items[..i].contains(item) {
                return RuleOutcome::fail("formvalidator_make_distinct");
            }
        }

        RuleOutcome::Pass
    }
}
