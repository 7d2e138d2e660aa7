use anyhow::{Context, Result, anyhow};
use std::path::Path;
use tracing::info;
use validation_core::FieldMap;
use validation_engine::Validator;
use validation_parser::parse_file;

use crate::output;

pub fn execute(rules_path: &str, data_path: &str, strict: bool, format: &str) -> Result<()> {
    info!("Validating data: {}", data_path);
    info!("Rules file: {}", rules_path);
    info!("Strict mode: {}", strict);

    // Parse the rules file
    let rules = parse_file(Path::new(rules_path))
        .with_context(|| format!("Failed to parse rules file: {}", rules_path))?;

    output::print_info(&format!(
        "Rules loaded: {} declared field(s)",
        rules.len()
    ));

    // Load the submitted data
    let content = std::fs::read_to_string(data_path)
        .with_context(|| format!("Failed to read data file: {}", data_path))?;
    let json: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse data file as JSON: {}", data_path))?;
    let fields = FieldMap::from_json(json)
        .ok_or_else(|| anyhow!("Data file must contain a JSON object: {}", data_path))?;

    output::print_info(&format!("Data loaded: {} field(s)", fields.len()));

    // Run the engine
    let validator = Validator::make(rules).with_strict(strict);
    let outcome = validator.validate(&fields);

    output::print_outcome(&outcome, format);

    if outcome.is_err() {
        std::process::exit(1);
    }

    Ok(())
}
