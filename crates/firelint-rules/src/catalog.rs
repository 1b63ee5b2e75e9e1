//! Catalog of built-in checks, for `firelint list-checks`.

use crate::{indexes, schema, security_rules};
use firelint_core::{naming, Severity};

/// Metadata describing one built-in check.
#[derive(Debug, Clone, Copy)]
pub struct CheckInfo {
    /// Kebab-case check name, as reported on findings.
    pub name: &'static str,
    /// Fault category this check reports.
    pub severity: Severity,
    /// One-line description.
    pub description: &'static str,
}

/// Returns every built-in check, grouped by the artifact it applies to.
#[must_use]
pub fn all_checks() -> Vec<CheckInfo> {
    vec![
        CheckInfo {
            name: security_rules::NO_PERMISSIVE_RULES,
            severity: Severity::Security,
            description: "Flags 'allow read, write: if true' and wildcard-with-allow lines",
        },
        CheckInfo {
            name: security_rules::NO_COMBINED_PERMISSIONS,
            severity: Severity::Security,
            description: "Flags combined read/write grants lacking an auth predicate",
        },
        CheckInfo {
            name: security_rules::REQUIRE_AUTH_FOR_WRITES,
            severity: Severity::Security,
            description: "Flags write-class grants with no auth predicate within 3 lines",
        },
        CheckInfo {
            name: indexes::NO_REDUNDANT_INDEXES,
            severity: Severity::Index,
            description: "Flags single-field indexes that Firestore creates automatically",
        },
        CheckInfo {
            name: indexes::INDEX_COLLECTION_REFERENCE,
            severity: Severity::Index,
            description: "Requires a collectionGroup/collection on every index",
        },
        CheckInfo {
            name: naming::CHECK_NAME,
            severity: Severity::Naming,
            description: "Enforces lowercase-leading camelCase or snake_case collection names",
        },
        CheckInfo {
            name: schema::REQUIRE_AUDIT_TIMESTAMPS,
            severity: Severity::Structure,
            description: "Requires createdAt/updatedAt (or snake_case) timestamp fields",
        },
        CheckInfo {
            name: schema::MAX_NESTING_DEPTH,
            severity: Severity::Structure,
            description: "Limits nested map depth in schema field trees (default max: 3)",
        },
        CheckInfo {
            name: schema::VALID_FIELD_TYPES,
            severity: Severity::Structure,
            description: "Restricts declared field types to the Firestore vocabulary",
        },
        CheckInfo {
            name: crate::WELL_FORMED_JSON,
            severity: Severity::Structure,
            description: "Reports malformed JSON in index and schema files",
        },
    ]
}
