//! The directive mini-language.
//!
//! A field's rule spec is a pipe-delimited list of directives, each a rule
//! name with optional options text after the first colon:
//!
//! ```text
//! rule-spec   := directive ("|" directive)*
//! directive   := name (":" options)?
//! ```
//!
//! Only the first `:` separates name from options, so option strings keep
//! any further colons intact (`regex:/\d+:/`, `dateformat:%H:%M`). The
//! reserved `nullable` token is extracted as a flag and never becomes a
//! directive.

/// One parsed `name[:options]` unit of a rule spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Rule name used for registry lookup
    pub name: String,

    /// Options text after the first `:`, verbatim; `None` when absent
    pub options: Option<String>,
}

/// The result of parsing one field's rule spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSpec {
    /// Directives in the order they were written
    pub directives: Vec<Directive>,

    /// Whether the spec contained the `nullable` token anywhere
    pub nullable: bool,
}

/// Parses a rule spec string into its directives and nullable flag.
///
/// Directive order is preserved exactly as written. Empty tokens (from
/// leading, trailing, or doubled pipes) are dropped; an empty options
/// string after `:` is treated as absent.
///
/// # Example
///
/// ```rust
/// use validation_parser::parse_spec;
///
/// let spec = parse_spec("nullable|string|min:6");
/// assert!(spec.nullable);
/// assert_eq!(spec.directives.len(), 2);
/// assert_eq!(spec.directives[0].name, "string");
/// assert_eq!(spec.directives[1].options.as_deref(), Some("6"));
/// ```
pub fn parse_spec(spec: &str) -> ParsedSpec {
    let mut directives = Vec::new();
    let mut nullable = false;

    for token in spec.split('|') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        let (name, options) = match token.split_once(':') {
            Some((name, options)) if !options.is_empty() => {
                (name, Some(options.to_string()))
            }
            Some((name, _)) => (name, None),
            None => (token, None),
        };

        if name == "nullable" {
            nullable = true;
            continue;
        }

        directives.push(Directive {
            name: name.to_string(),
            options,
        });
    }

    ParsedSpec {
        directives,
        nullable,
    }
}
