use anyhow::{Context, Result, bail};
use std::path::Path;
use tracing::info;
use validation_engine::RuleRegistry;
use validation_parser::{parse_file, parse_spec};

use crate::output;

pub fn execute(rules_path: &str) -> Result<()> {
    info!("Checking rules file: {}", rules_path);

    // Parse the rules file
    let rules = parse_file(Path::new(rules_path))
        .with_context(|| format!("Failed to parse rules file: {}", rules_path))?;

    output::print_info(&format!(
        "Rules loaded: {} declared field(s)",
        rules.len()
    ));

    // Resolve every directive against the built-in registry so
    // configuration errors surface before any data does.
    let registry = RuleRegistry::shared();
    let mut directives = 0usize;
    let mut unknown = Vec::new();

    for field_rules in rules.iter() {
        let spec = parse_spec(&field_rules.spec);
        directives += spec.directives.len();

        for directive in &spec.directives {
            if registry.lookup(&directive.name).is_none() {
                unknown.push(format!(
                    "field '{}' references unknown rule '{}'",
                    field_rules.field, directive.name
                ));
            }
        }
    }

    println!("\nRules Summary:");
    println!("  File:       {}", rules_path);
    println!("  Fields:     {}", rules.len());
    println!("  Directives: {}", directives);

    if !unknown.is_empty() {
        for problem in &unknown {
            output::print_error(problem);
        }
        bail!("{} unknown rule reference(s)", unknown.len());
    }

    output::print_success("Rules file is valid");
    Ok(())
}
