//! Project command implementation.

use anyhow::{Context, Result};
use firelint_rules::validate_project;
use std::path::Path;

use crate::OutputFormat;

/// Runs the `project` command: validates every discovered artifact and
/// returns the worst exit code.
pub fn run(path: &Path) -> Result<i32> {
    let report = validate_project(path)
        .with_context(|| format!("Failed to validate project: {}", path.display()))?;

    for artifact in &report.artifacts {
        println!(
            "\nValidating {}: {}",
            artifact.kind.label(),
            artifact.path.display()
        );
        super::output::print(&artifact.result, OutputFormat::Text)?;
    }

    if report.artifacts.is_empty() {
        println!("No Firestore artifacts found in {}", path.display());
    }

    Ok(report.exit_code())
}
