use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use tracing::info;
use validation_core::RuleSetBuilder;

use crate::output;

pub fn execute(output_path: Option<&str>) -> Result<()> {
    info!("Writing starter rules file");

    let rules = RuleSetBuilder::new()
        .field("username", "required|string|alphadash|min:3|max:32")
        .field("email", "required|email")
        .field("password", "required|string|min:8|confirmed")
        .field("age", "nullable|integer|min:16|max:120")
        .field("website", "url")
        .field("terms", "required|accepted")
        .build();

    let yaml = serde_yaml_ng::to_string(&rules).context("Failed to serialize rules to YAML")?;
    let content = format!(
        "# Field validation rules.\n\
         # Each entry declares a field and its pipe-delimited directives;\n\
         # fields are checked in the order declared here.\n{}",
        yaml
    );

    if let Some(path) = output_path {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path))?;
        file.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write to file: {}", path))?;
        output::print_success(&format!("Rules file written to: {}", path));
    } else {
        println!("{}", content);
    }

    Ok(())
}
