//! Parser for validation rules files (YAML/TOML) and the directive
//! mini-language.
//!
//! A rules file declares the fields to validate and their pipe-delimited
//! directive strings, in declaration order:
//!
//! ```rust
//! use validation_parser::parse_yaml;
//!
//! let yaml = r#"
//! fields:
//!   - field: username
//!     spec: required|string|alphanum
//!   - field: age
//!     spec: nullable|integer|min:16|max:40
//! "#;
//!
//! let rules = parse_yaml(yaml).expect("Failed to parse rules");
//! assert_eq!(rules.len(), 2);
//! assert_eq!(rules.spec_for("age"), Some("nullable|integer|min:16|max:40"));
//! ```

mod directive;

pub use directive::{Directive, ParsedSpec, parse_spec};

use std::path::Path;
use thiserror::Error;
use validation_core::RuleSet;

/// Errors that can occur while loading a rules file.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported rules file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Parse a rule set from a YAML string.
pub fn parse_yaml(content: &str) -> Result<RuleSet> {
    let rules: RuleSet = serde_yaml_ng::from_str(content)?;
    Ok(rules)
}

/// Parse a rule set from a TOML string.
///
/// # Example
///
/// ```rust
/// use validation_parser::parse_toml;
///
/// let toml = r#"
/// [[fields]]
/// field = "email"
/// spec = "required|email"
/// "#;
///
/// let rules = parse_toml(toml).unwrap();
/// assert_eq!(rules.spec_for("email"), Some("required|email"));
/// ```
pub fn parse_toml(content: &str) -> Result<RuleSet> {
    let rules: RuleSet =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    Ok(rules)
}

/// Detect the rules file format from a path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `RulesFormat::Yaml`
/// * `.toml` → `RulesFormat::Toml`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<RulesFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(RulesFormat::Yaml),
        "toml" => Ok(RulesFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a rule set from a file with automatic format detection.
///
/// # Example
///
/// ```no_run
/// use validation_parser::parse_file;
/// use std::path::Path;
///
/// let rules = parse_file(Path::new("rules/signup.yml")).unwrap();
/// println!("Loaded {} field rules", rules.len());
/// ```
pub fn parse_file(path: &Path) -> Result<RuleSet> {
    let content = std::fs::read_to_string(path)?;
    let format = detect_format(path)?;

    match format {
        RulesFormat::Yaml => parse_yaml(&content),
        RulesFormat::Toml => parse_toml(&content),
    }
}
