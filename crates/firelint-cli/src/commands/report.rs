//! Report command implementation: project validation plus a Markdown summary.

use anyhow::{Context, Result};
use chrono::Local;
use firelint_rules::{validate_project, ProjectReport};
use std::fmt::Write as _;
use std::path::Path;

/// Runs the `report` command. Exit code folds like `project`.
pub fn run(path: &Path, output: &Path) -> Result<i32> {
    let report = validate_project(path)
        .with_context(|| format!("Failed to validate project: {}", path.display()))?;

    let markdown = render_markdown(&report);
    std::fs::write(output, markdown)
        .with_context(|| format!("Failed to write report: {}", output.display()))?;

    println!("Report generated: {}", output.display());
    Ok(report.exit_code())
}

fn render_markdown(report: &ProjectReport) -> String {
    let mut md = String::new();
    let _ = writeln!(md, "# Firestore Validation Report");
    let _ = writeln!(md);
    let _ = writeln!(md, "Project: `{}`", report.root.display());
    let _ = writeln!(
        md,
        "Generated: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(md);
    let _ = writeln!(md, "---");

    for artifact in &report.artifacts {
        let _ = writeln!(md);
        let _ = writeln!(
            md,
            "## {} (`{}`)",
            title_case(artifact.kind.label()),
            artifact.path.display()
        );
        let _ = writeln!(md);

        if artifact.result.is_pass() {
            let _ = writeln!(md, "No issues found");
        } else {
            let _ = writeln!(md, "### Issues Found");
            let _ = writeln!(md);
            for finding in &artifact.result.findings {
                let _ = writeln!(md, "- {}", finding.format().replace('\n', "\n  "));
            }
        }

        for warning in &artifact.result.warnings {
            let _ = writeln!(md, "- warning: {warning}");
        }
    }

    let _ = writeln!(md);
    let _ = writeln!(md, "---");
    let _ = writeln!(md, "## Summary");
    let _ = writeln!(md);
    let _ = writeln!(md, "- **Total Errors:** {}", report.finding_count());
    let _ = writeln!(md, "- **Total Warnings:** {}", report.warning_count());
    let _ = writeln!(md);

    let status = if report.is_pass() { "PASSED" } else { "FAILED" };
    let _ = writeln!(md, "**Validation Status:** {status}");

    md
}

fn title_case(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use firelint_core::{Finding, Severity, ValidationResult};
    use firelint_rules::{ArtifactKind, ArtifactReport};
    use std::path::PathBuf;

    fn report_with(findings: Vec<Finding>) -> ProjectReport {
        let mut result = ValidationResult::new();
        for finding in findings {
            result.push(finding);
        }
        ProjectReport {
            root: PathBuf::from("demo"),
            artifacts: vec![ArtifactReport {
                path: PathBuf::from("demo/firestore.rules"),
                kind: ArtifactKind::Rules,
                result,
            }],
        }
    }

    #[test]
    fn clean_report_says_passed() {
        let md = render_markdown(&report_with(vec![]));
        assert!(md.contains("# Firestore Validation Report"));
        assert!(md.contains("## Security rules (`demo/firestore.rules`)"));
        assert!(md.contains("No issues found"));
        assert!(md.contains("**Validation Status:** PASSED"));
    }

    #[test]
    fn failing_report_lists_findings() {
        let md = render_markdown(&report_with(vec![Finding::new(
            "no-permissive-rules",
            Severity::Security,
            "Overly permissive rule",
        )
        .at_line(5)
        .with_suggestion("tighten it")]));
        assert!(md.contains("### Issues Found"));
        assert!(md.contains("(line 5) Overly permissive rule"));
        assert!(md.contains("= help: tighten it"));
        assert!(md.contains("- **Total Errors:** 1"));
        assert!(md.contains("**Validation Status:** FAILED"));
    }
}
