//! Structural, naming, typing, and nesting checks over schema documents.

use firelint_core::document::SchemaDocument;
use firelint_core::{naming, read_artifact, CheckError, Finding, Severity, ValidationResult};
use serde_json::Value;
use std::path::Path;

/// Check name: required creation/update timestamp fields.
pub const REQUIRE_AUDIT_TIMESTAMPS: &str = "require-audit-timestamps";

/// Check name: nested map depth limit.
pub const MAX_NESTING_DEPTH: &str = "max-nesting-depth";

/// Check name: field type whitelist.
pub const VALID_FIELD_TYPES: &str = "valid-field-types";

/// Accepted spellings for the audit timestamp type.
pub const TIMESTAMP_TYPES: [&str; 2] = ["timestamp", "Timestamp"];

/// Allowed field type vocabulary.
pub const ALLOWED_FIELD_TYPES: [&str; 12] = [
    "string",
    "number",
    "boolean",
    "map",
    "array",
    "timestamp",
    "Timestamp",
    "geopoint",
    "GeoPoint",
    "reference",
    "DocumentReference",
    "null",
];

/// Required timestamp pairs: candidate spellings in priority order
/// (snake_case first), plus the label used in messages.
const TIMESTAMP_PAIRS: [([&str; 2], &str); 2] = [
    (["created_at", "createdAt"], "creation"),
    (["updated_at", "updatedAt"], "update"),
];

/// Checks a schema document: collection naming, audit timestamps, nesting
/// depth, and field types. All four passes run unconditionally.
#[derive(Debug, Clone, Copy)]
pub struct SchemaChecker {
    /// Maximum allowed nesting depth; the top-level field map is depth 1.
    pub max_depth: usize,
}

impl Default for SchemaChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaChecker {
    /// Creates a checker with the default depth limit of 3.
    #[must_use]
    pub fn new() -> Self {
        Self { max_depth: 3 }
    }

    /// Overrides the maximum nesting depth.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Runs all passes over the document.
    #[must_use]
    pub fn check(&self, schema: &SchemaDocument) -> ValidationResult {
        let mut result = ValidationResult::new();
        self.check_naming(schema, &mut result);
        self.check_timestamps(schema, &mut result);
        self.check_nesting(schema, &mut result);
        self.check_field_types(schema, &mut result);
        result
    }

    fn check_naming(&self, schema: &SchemaDocument, result: &mut ValidationResult) {
        if !schema.collection.is_empty() && !naming::is_valid_collection_name(&schema.collection) {
            result.push(
                Finding::new(
                    naming::CHECK_NAME,
                    Severity::Naming,
                    format!(
                        "Collection name '{}' violates naming convention",
                        schema.collection
                    ),
                )
                .with_suggestion("Use snake_case or camelCase with plural nouns"),
            );
        }

        for sub in &schema.subcollections {
            if !sub.name.is_empty() && !naming::is_valid_collection_name(&sub.name) {
                result.push(
                    Finding::new(
                        naming::CHECK_NAME,
                        Severity::Naming,
                        format!("Subcollection name '{}' violates naming convention", sub.name),
                    )
                    .with_suggestion("Use snake_case or camelCase"),
                );
            }
        }
    }

    fn check_timestamps(&self, schema: &SchemaDocument, result: &mut ValidationResult) {
        for (candidates, label) in TIMESTAMP_PAIRS {
            // First matching spelling wins and ends the pair; exactly one of
            // {found valid, found invalid, missing} fires.
            let found = candidates
                .iter()
                .find_map(|name| schema.fields.get(*name).map(|def| (*name, def)));

            match found {
                Some((name, def)) => {
                    let declared = def.get("type").and_then(Value::as_str).unwrap_or_default();
                    if !TIMESTAMP_TYPES.contains(&declared) {
                        result.push(
                            Finding::new(
                                REQUIRE_AUDIT_TIMESTAMPS,
                                Severity::Structure,
                                format!(
                                    "Field '{name}' should be of type 'timestamp', not '{declared}'"
                                ),
                            )
                            .with_suggestion("Use Firestore Timestamp type for date/time fields"),
                        );
                    }
                }
                None => {
                    result.push(
                        Finding::new(
                            REQUIRE_AUDIT_TIMESTAMPS,
                            Severity::Structure,
                            format!(
                                "Missing required {label} timestamp field (one of: {})",
                                candidates.join(", ")
                            ),
                        )
                        .with_suggestion(format!(
                            "Add '{}' (preferred) or '{}' field with type 'timestamp' and required: true",
                            candidates[1], candidates[0]
                        )),
                    );
                }
            }
        }
    }

    fn check_nesting(&self, schema: &SchemaDocument, result: &mut ValidationResult) {
        // The top-level field map is depth 1.
        for (name, value) in &schema.fields {
            if let Some(properties) = nested_map_properties(value) {
                self.descend(properties, 2, &format!("root.{name}"), result);
            }
        }
    }

    fn descend(&self, node: &Value, depth: usize, path: &str, result: &mut ValidationResult) {
        if depth > self.max_depth {
            result.push(
                Finding::new(
                    MAX_NESTING_DEPTH,
                    Severity::Structure,
                    format!(
                        "Nesting too deep at '{path}' (depth: {depth}, max: {})",
                        self.max_depth
                    ),
                )
                .with_suggestion("Consider using subcollections or flattening the structure"),
            );
            return;
        }

        let Some(map) = node.as_object() else {
            return;
        };
        for (name, value) in map {
            if let Some(properties) = nested_map_properties(value) {
                self.descend(properties, depth + 1, &format!("{path}.{name}"), result);
            }
        }
    }

    fn check_field_types(&self, schema: &SchemaDocument, result: &mut ValidationResult) {
        for (name, def) in &schema.fields {
            let Some(def) = def.as_object() else {
                // Non-object definitions are tolerated leaves.
                continue;
            };
            let Some(declared) = def.get("type") else {
                continue;
            };
            if declared.is_null() {
                continue;
            }
            // A non-string type value is rendered as-is in the message.
            let rendered = match declared.as_str() {
                Some("") => continue,
                Some(t) if ALLOWED_FIELD_TYPES.contains(&t) => continue,
                Some(t) => t.to_string(),
                None => declared.to_string(),
            };
            result.push(
                Finding::new(
                    VALID_FIELD_TYPES,
                    Severity::Structure,
                    format!("Invalid field type '{rendered}' for field '{name}'"),
                )
                .with_suggestion(format!("Use one of: {}", ALLOWED_FIELD_TYPES.join(", "))),
            );
        }
    }
}

/// Returns the `properties` value of a nested-map field definition, or None
/// for leaves.
fn nested_map_properties(value: &Value) -> Option<&Value> {
    let def = value.as_object()?;
    if def.get("type").and_then(Value::as_str) == Some("map") {
        def.get("properties")
    } else {
        None
    }
}

/// Loads a schema file and checks it.
///
/// Malformed JSON yields a single structure finding and no further analysis.
///
/// # Errors
///
/// Returns [`CheckError`] if the file is absent or unreadable.
pub fn check_schema_file(path: &Path) -> Result<ValidationResult, CheckError> {
    let content = read_artifact(path)?;
    tracing::debug!("Checking schema document: {}", path.display());

    let schema: SchemaDocument = match serde_json::from_str(&content) {
        Ok(schema) => schema,
        Err(e) => {
            let mut result = ValidationResult::new();
            result.push(Finding::new(
                crate::WELL_FORMED_JSON,
                Severity::Structure,
                format!("Invalid JSON in schema file: {e}"),
            ));
            return Ok(result);
        }
    };

    Ok(SchemaChecker::new().check(&schema))
}
