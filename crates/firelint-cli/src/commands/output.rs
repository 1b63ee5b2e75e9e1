//! Shared output formatting for validation results.

use anyhow::Result;
use firelint_core::{Severity, ValidationResult};

use crate::OutputFormat;

/// Prints a single artifact's result in the requested format and a
/// pass/fail summary line.
pub fn print(result: &ValidationResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
    }
    Ok(())
}

fn print_text(result: &ValidationResult) {
    for finding in &result.findings {
        let category = match finding.severity {
            Severity::Security => "\x1b[31msecurity\x1b[0m",
            Severity::Naming => "\x1b[35mnaming\x1b[0m",
            Severity::Structure => "\x1b[33mstructure\x1b[0m",
            Severity::Index => "\x1b[36mindex\x1b[0m",
            Severity::Success => "success",
        };

        match finding.line {
            Some(line) => println!("[{category}] (line {line}) {}", finding.message),
            None => println!("[{category}] {}", finding.message),
        }
        if let Some(suggestion) = &finding.suggestion {
            println!("  = help: {suggestion}");
        }
    }

    for warning in &result.warnings {
        println!("\x1b[33mwarning\x1b[0m: {warning}");
    }

    if result.is_pass() {
        println!("\x1b[32mValidation passed - no issues found\x1b[0m");
    } else {
        println!(
            "\x1b[31mValidation failed - {} issue(s) found\x1b[0m",
            result.findings.len()
        );
    }
}

fn print_json(result: &ValidationResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use firelint_core::{Finding, Severity, ValidationResult};

    #[test]
    fn json_output_shape_is_stable() {
        let mut result = ValidationResult::new();
        result.push(
            Finding::new("no-permissive-rules", Severity::Security, "too permissive")
                .at_line(5)
                .with_suggestion("restrict access"),
        );
        result.push(Finding::new(
            "no-redundant-indexes",
            Severity::Index,
            "redundant index",
        ));
        result.warn("wildcard match found");

        let json = serde_json::to_value(&result).expect("result should serialize");

        let first = &json["findings"][0];
        assert_eq!(first["check"], "no-permissive-rules");
        assert_eq!(first["severity"], "security");
        assert_eq!(first["line"], 5);
        assert_eq!(first["suggestion"], "restrict access");

        // Absent line/suggestion are omitted, not serialized as null.
        let second = &json["findings"][1];
        assert_eq!(second["severity"], "index");
        assert!(second.get("line").is_none());
        assert!(second.get("suggestion").is_none());

        assert_eq!(json["warnings"][0], "wildcard match found");
    }
}
