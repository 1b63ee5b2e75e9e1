//! Integration tests: end-to-end validation over real files on disk.
//!
//! Builds throwaway project trees with `tempfile` and drives the file-level
//! entry points the CLI uses, asserting on exit codes and finding content.

use firelint_rules::project::validate_project;
use firelint_rules::{
    check_indexes_file, check_rules_file, check_schema_file, ArtifactKind, CheckError, Severity,
};
use std::fs;
use tempfile::TempDir;

fn project_with(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("tempdir should create");
    for (name, content) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("parent dirs should create");
        }
        fs::write(path, content).expect("fixture file should write");
    }
    dir
}

const CLEAN_RULES: &str = "rules_version = '2';\n\
service cloud.firestore {\n\
  match /databases/{database}/documents {\n\
    match /users/{userId} {\n\
      allow read: if true;\n\
      allow write: if request.auth.uid == userId;\n\
    }\n\
  }\n\
}\n";

const CLEAN_SCHEMA: &str = r#"{
    "collection": "orders",
    "fields": {
        "createdAt": {"type": "timestamp"},
        "updatedAt": {"type": "timestamp"}
    }
}"#;

#[test]
fn permissive_rule_on_line_five_exits_one() {
    let dir = project_with(&[(
        "firestore.rules",
        "\n\n\n\nallow read, write: if true\n",
    )]);

    let result = check_rules_file(&dir.path().join("firestore.rules")).expect("file should load");
    assert_eq!(result.exit_code(), 1);

    let at_five: Vec<_> = result.findings.iter().filter(|f| f.line == Some(5)).collect();
    assert!(!at_five.is_empty(), "expected a finding on line 5");
}

#[test]
fn two_field_index_with_valid_name_exits_zero() {
    let dir = project_with(&[(
        "firestore.indexes.json",
        r#"{"indexes":[{"fields":[{"fieldPath":"a"},{"fieldPath":"b"}],"collectionGroup":"orders"}]}"#,
    )]);

    let result =
        check_indexes_file(&dir.path().join("firestore.indexes.json")).expect("file should load");
    assert!(result.is_pass(), "unexpected findings: {:?}", result.findings);
    assert_eq!(result.exit_code(), 0);
}

#[test]
fn valid_schema_exits_zero() {
    let dir = project_with(&[("users.schema.json", CLEAN_SCHEMA)]);

    let result = check_schema_file(&dir.path().join("users.schema.json")).expect("file should load");
    assert_eq!(result.exit_code(), 0);
}

#[test]
fn malformed_json_is_one_structure_finding() {
    let dir = project_with(&[("users.schema.json", "{not json")]);

    let result = check_schema_file(&dir.path().join("users.schema.json")).expect("file should load");
    assert_eq!(result.findings.len(), 1);
    assert_eq!(result.findings[0].severity, Severity::Structure);
    assert_eq!(result.exit_code(), 3);
}

#[test]
fn non_object_fields_value_is_one_structure_finding() {
    // `fields` must be a JSON object; any other value is treated as a
    // malformed document, not as a schema with no fields.
    let dir = project_with(&[(
        "users.schema.json",
        r#"{"collection": "users", "fields": "x"}"#,
    )]);

    let result = check_schema_file(&dir.path().join("users.schema.json")).expect("file should load");
    assert_eq!(result.findings.len(), 1);
    assert_eq!(result.findings[0].check, "well-formed-json");
    assert_eq!(result.exit_code(), 3);
}

#[test]
fn missing_file_is_a_load_failure_not_a_finding() {
    let dir = TempDir::new().expect("tempdir should create");
    let err = check_rules_file(&dir.path().join("firestore.rules")).expect_err("should fail");
    assert!(matches!(err, CheckError::NotFound(_)));
}

#[test]
fn project_run_discovers_all_artifact_kinds() {
    let dir = project_with(&[
        ("firestore.rules", CLEAN_RULES),
        (
            "firestore.indexes.json",
            r#"{"indexes":[{"fields":[{"fieldPath":"a"},{"fieldPath":"b"}],"collectionGroup":"orders"}]}"#,
        ),
        ("schemas/orders.schema.json", CLEAN_SCHEMA),
        ("schemas/users.schema.json", CLEAN_SCHEMA),
    ]);

    let report = validate_project(dir.path()).expect("project run should succeed");
    let kinds: Vec<ArtifactKind> = report.artifacts.iter().map(|a| a.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ArtifactKind::Rules,
            ArtifactKind::Indexes,
            ArtifactKind::Schema,
            ArtifactKind::Schema,
        ]
    );
    assert!(report.is_pass());
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn project_exit_code_is_worst_artifact() {
    let dir = project_with(&[
        ("firestore.rules", "allow read, write: if true\n"),
        (
            "firestore.indexes.json",
            r#"{"indexes":[{"fields":[{"fieldPath":"a"}],"collectionGroup":"orders"}]}"#,
        ),
    ]);

    let report = validate_project(dir.path()).expect("project run should succeed");
    // Security (1) folded with index (4) gives 4.
    assert_eq!(report.exit_code(), 4);
}

#[test]
fn parse_failure_in_one_artifact_does_not_abort_the_run() {
    let dir = project_with(&[
        ("broken.schema.json", "{oops"),
        ("orders.schema.json", CLEAN_SCHEMA),
    ]);

    let report = validate_project(dir.path()).expect("project run should succeed");
    assert_eq!(report.artifacts.len(), 2);
    assert_eq!(report.exit_code(), 3);
    // The clean schema still produced its own independent result.
    assert!(report.artifacts[1].result.is_pass());
}

#[test]
fn findings_do_not_leak_between_artifacts() {
    let dir = project_with(&[
        ("bad.schema.json", r#"{"collection": "Bad", "fields": {
            "createdAt": {"type": "timestamp"}, "updatedAt": {"type": "timestamp"}}}"#),
        ("good.schema.json", CLEAN_SCHEMA),
    ]);

    let report = validate_project(dir.path()).expect("project run should succeed");
    assert_eq!(report.artifacts[0].result.findings.len(), 1);
    assert!(report.artifacts[1].result.findings.is_empty());
}

#[test]
fn empty_project_passes() {
    let dir = TempDir::new().expect("tempdir should create");
    let report = validate_project(dir.path()).expect("project run should succeed");
    assert!(report.artifacts.is_empty());
    assert_eq!(report.exit_code(), 0);
}
