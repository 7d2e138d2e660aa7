//! # Field Validation Engine
//!
//! Evaluates submitted field values against a declarative rule set. Each
//! field's pipe-delimited directive string is parsed and dispatched
//! through a pluggable rule registry; the engine reports the first
//! violation in field-declaration order.
//!
//! - Type rules (`string`, `integer`, ...) are non-exclusive: declaring
//!   several on one field means any one passing is enough.
//! - `nullable` exempts an explicitly null value from all other checks;
//!   without it, an explicit null always fails.
//! - Strict mode treats input fields without declared rules as errors.
//!
//! ## Example
//!
//! ```rust
//! use validation_core::{FieldMap, RuleSetBuilder};
//! use validation_engine::{ValidationError, Validator};
//!
//! let rules = RuleSetBuilder::new()
//!     .field("username", "required|string|min:3")
//!     .field("age", "nullable|integer|min:16|max:40")
//!     .build();
//!
//! let validator = Validator::make(rules);
//!
//! let mut fields = FieldMap::new();
//! fields.insert("username", "charlie");
//! fields.insert("age", 10i64);
//!
//! let err = validator.validate(&fields).unwrap_err();
//! assert!(matches!(err, ValidationError::Field { .. }));
//! assert_eq!(err.to_string(), "age must be at least 16");
//! ```

mod engine;
mod error;
mod registry;
pub mod rules;

pub use engine::*;
pub use error::*;
pub use registry::*;
