//! Single-artifact check commands: `rules`, `indexes`, `schema`.

use anyhow::Result;
use firelint_core::{CheckError, Severity, ValidationResult};
use firelint_rules::{check_indexes_file, check_rules_file, check_schema_file};
use std::path::Path;

use super::output;
use crate::OutputFormat;

/// Runs the `rules` command. A load failure exits with the security code.
pub fn rules(path: &Path, format: OutputFormat) -> Result<i32> {
    report(check_rules_file(path), format, Severity::Security)
}

/// Runs the `indexes` command. A load failure exits with the index code.
pub fn indexes(path: &Path, format: OutputFormat) -> Result<i32> {
    report(check_indexes_file(path), format, Severity::Index)
}

/// Runs the `schema` command. A load failure exits with the structure code.
pub fn schema(path: &Path, format: OutputFormat) -> Result<i32> {
    report(check_schema_file(path), format, Severity::Structure)
}

fn report(
    outcome: Result<ValidationResult, CheckError>,
    format: OutputFormat,
    load_failure: Severity,
) -> Result<i32> {
    match outcome {
        Ok(result) => {
            output::print(&result, format)?;
            Ok(result.exit_code())
        }
        Err(e) => {
            eprintln!("Error: {e}");
            Ok(load_failure.exit_code())
        }
    }
}
