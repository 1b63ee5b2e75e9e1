//! # firelint-rules
//!
//! Built-in checkers for firelint.
//!
//! ## Available Checks
//!
//! | Name | Category | Description |
//! |------|----------|-------------|
//! | `no-permissive-rules` | security | Flags `allow read, write: if true` and wildcard allows |
//! | `no-combined-permissions` | security | Combined read/write without an auth predicate |
//! | `require-auth-for-writes` | security | Write grant with no auth predicate within 3 lines |
//! | `no-redundant-indexes` | index | Single-field indexes the store auto-creates |
//! | `index-collection-reference` | index | Index without a collection reference |
//! | `collection-naming` | naming | Collection names outside camelCase/snake_case |
//! | `require-audit-timestamps` | structure | Missing or mistyped created/updated fields |
//! | `max-nesting-depth` | structure | Nested map fields beyond the depth limit |
//! | `valid-field-types` | structure | Field types outside the Firestore vocabulary |
//!
//! ## Usage
//!
//! ```ignore
//! use firelint_rules::SecurityRulesScanner;
//!
//! let result = SecurityRulesScanner::new().check(rules_text);
//! std::process::exit(result.exit_code());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod indexes;
/// Whole-project validation and artifact discovery.
pub mod project;
mod schema;
mod security_rules;

pub use catalog::{all_checks, CheckInfo};
pub use indexes::{
    check_indexes_file, IndexChecker, INDEX_COLLECTION_REFERENCE, NO_REDUNDANT_INDEXES,
};
pub use project::{
    validate_project, ArtifactKind, ArtifactReport, ProjectError, ProjectReport,
};
pub use schema::{
    check_schema_file, SchemaChecker, ALLOWED_FIELD_TYPES, MAX_NESTING_DEPTH,
    REQUIRE_AUDIT_TIMESTAMPS, TIMESTAMP_TYPES, VALID_FIELD_TYPES,
};
pub use security_rules::{
    check_rules_file, SecurityRulesScanner, AUTH_PREDICATES, NO_COMBINED_PERMISSIONS,
    NO_PERMISSIVE_RULES, REQUIRE_AUTH_FOR_WRITES,
};

/// Check name reported for malformed JSON input.
pub const WELL_FORMED_JSON: &str = "well-formed-json";

/// Re-export core types for convenience.
pub use firelint_core::{CheckError, Finding, Severity, ValidationResult};
