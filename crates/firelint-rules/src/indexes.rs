//! Structural checks over composite index declarations.

use firelint_core::document::IndexConfig;
use firelint_core::{naming, read_artifact, CheckError, Finding, Severity, ValidationResult};
use std::path::Path;

/// Check name: single-field indexes the store already provides.
pub const NO_REDUNDANT_INDEXES: &str = "no-redundant-indexes";

/// Check name: declarations without a collection reference.
pub const INDEX_COLLECTION_REFERENCE: &str = "index-collection-reference";

/// Checks composite index declarations for redundancy and missing or
/// ill-named collection references.
///
/// Declarations are evaluated independently and exhaustively; one
/// declaration's failure never stops evaluation of the rest. Findings carry
/// no line numbers since they are structural, not text-positional.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexChecker;

impl IndexChecker {
    /// Creates a new checker.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Checks every declaration in the config.
    #[must_use]
    pub fn check(&self, config: &IndexConfig) -> ValidationResult {
        let mut result = ValidationResult::new();

        for declaration in &config.indexes {
            if declaration.fields.len() == 1 {
                let field = declaration.fields[0]
                    .field_path
                    .as_deref()
                    .unwrap_or("unknown");
                result.push(
                    Finding::new(
                        NO_REDUNDANT_INDEXES,
                        Severity::Index,
                        format!("Redundant single-field index on '{field}'"),
                    )
                    .with_suggestion(
                        "Firestore automatically indexes single fields - remove this index",
                    ),
                );
            }

            match declaration.target_collection() {
                None => result.push(Finding::new(
                    INDEX_COLLECTION_REFERENCE,
                    Severity::Index,
                    "Index missing collectionGroup/collection field",
                )),
                Some(collection) if !naming::is_valid_collection_name(collection) => {
                    result.push(
                        Finding::new(
                            naming::CHECK_NAME,
                            Severity::Naming,
                            format!("Collection name '{collection}' violates naming convention"),
                        )
                        .with_suggestion("Use snake_case or camelCase for collection names"),
                    );
                }
                Some(_) => {}
            }
        }

        result
    }
}

/// Loads an indexes file and checks it.
///
/// Malformed JSON yields a single structure finding and no further analysis.
///
/// # Errors
///
/// Returns [`CheckError`] if the file is absent or unreadable.
pub fn check_indexes_file(path: &Path) -> Result<ValidationResult, CheckError> {
    let content = read_artifact(path)?;
    tracing::debug!("Checking index declarations: {}", path.display());

    let config: IndexConfig = match serde_json::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            let mut result = ValidationResult::new();
            result.push(Finding::new(
                crate::WELL_FORMED_JSON,
                Severity::Structure,
                format!("Invalid JSON in indexes file: {e}"),
            ));
            return Ok(result);
        }
    };

    Ok(IndexChecker::new().check(&config))
}
