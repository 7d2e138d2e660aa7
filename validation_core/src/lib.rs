//! # Field Validation Core
//!
//! Core data structures and collaborator contracts for the Field Validation
//! Engine. A rule set maps field names to pipe-delimited directive strings
//! (`"required|string|min:6"`); the engine in `validation_engine` evaluates
//! submitted field values against it through a pluggable rule registry.
//!
//! ## Key Concepts
//!
//! - **RuleSet**: ordered table of field names and their directive strings
//! - **FieldValue / FieldMap**: the submitted data being validated
//! - **Rule**: the uniform contract every predicate rule implements
//! - **Language**: resolves message keys and placeholders to user-facing text
//! - **UploadedFiles**: per-field upload metadata consumed by upload-aware rules
//!
//! ## Example
//!
//! ```rust
//! use validation_core::{FieldMap, RuleSetBuilder};
//!
//! let rules = RuleSetBuilder::new()
//!     .field("username", "required|string|min:3")
//!     .field("age", "nullable|integer|min:16")
//!     .build();
//!
//! let mut fields = FieldMap::new();
//! fields.insert("username", "charlie");
//! fields.insert("age", 25i64);
//!
//! assert_eq!(rules.len(), 2);
//! assert!(fields.contains_key("username"));
//! ```

pub mod builder;
pub mod fields;
pub mod language;
pub mod rule;
pub mod ruleset;
pub mod uploads;
pub mod value;

pub use builder::*;
pub use fields::*;
pub use language::*;
pub use rule::*;
pub use ruleset::*;
pub use uploads::*;
pub use value::*;
