//! Document model for index and schema configuration files.
//!
//! Shapes are deliberately tolerant: unknown keys are ignored and schema
//! field definitions stay raw JSON values, since a definition may be an
//! arbitrarily nested map or a malformed leaf that the checkers report on
//! (or skip) rather than fail to load.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Top-level shape of a `firestore.indexes.json` file.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Composite index declarations.
    pub indexes: Vec<IndexDeclaration>,
}

/// One composite index declaration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexDeclaration {
    /// Ordered fields covered by the index.
    pub fields: Vec<IndexField>,
    /// Target collection group, if declared.
    pub collection_group: Option<String>,
    /// Target collection, if declared (legacy spelling).
    pub collection: Option<String>,
}

impl IndexDeclaration {
    /// Returns the declared target collection name, preferring
    /// `collectionGroup` over `collection`. Empty strings count as missing.
    #[must_use]
    pub fn target_collection(&self) -> Option<&str> {
        self.collection_group
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.collection.as_deref().filter(|s| !s.is_empty()))
    }
}

/// One field within an index declaration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexField {
    /// Dotted path of the indexed field.
    pub field_path: Option<String>,
}

/// A per-collection schema definition (`*.schema.json`).
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SchemaDocument {
    /// Collection name.
    pub collection: String,
    /// Declared subcollections.
    pub subcollections: Vec<Subcollection>,
    /// Field name to definition. Definitions are raw JSON: usually an object
    /// with a `type` key, possibly a nested map carrying `properties`.
    ///
    /// The mapping itself must be a JSON object; a document whose `fields`
    /// is any other value fails deserialization and is reported as a single
    /// malformed-JSON structure finding.
    pub fields: Map<String, Value>,
}

/// A subcollection entry within a schema document.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Subcollection {
    /// Subcollection name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_target_prefers_collection_group() {
        let decl: IndexDeclaration = serde_json::from_str(
            r#"{"collectionGroup": "orders", "collection": "legacy", "fields": []}"#,
        )
        .unwrap();
        assert_eq!(decl.target_collection(), Some("orders"));
    }

    #[test]
    fn index_target_falls_back_to_collection() {
        let decl: IndexDeclaration =
            serde_json::from_str(r#"{"collectionGroup": "", "collection": "orders"}"#).unwrap();
        assert_eq!(decl.target_collection(), Some("orders"));
    }

    #[test]
    fn index_target_missing_when_both_absent() {
        let decl: IndexDeclaration = serde_json::from_str(r"{}").unwrap();
        assert_eq!(decl.target_collection(), None);
    }

    #[test]
    fn schema_tolerates_unknown_keys_and_raw_fields() {
        let schema: SchemaDocument = serde_json::from_str(
            r#"{
                "collection": "users",
                "description": "ignored",
                "fields": {
                    "name": {"type": "string", "required": true},
                    "odd": "not an object"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(schema.collection, "users");
        assert_eq!(schema.fields.len(), 2);
        assert!(schema.subcollections.is_empty());
    }
}
