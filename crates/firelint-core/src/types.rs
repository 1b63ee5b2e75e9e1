//! Core types for validation findings and results.

use serde::{Deserialize, Serialize};

/// Fault category for a validation finding.
///
/// The numeric value doubles as the process exit code. Categories are
/// mutually distinct faults, not a ranking of importance; `Success` is the
/// unique "no problem" value and never appears in a stored finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// No issues found.
    Success = 0,
    /// Overly permissive or unauthenticated access rule.
    Security = 1,
    /// Identifier violates the collection naming convention.
    Naming = 2,
    /// Structural defect: missing audit fields, bad types, deep nesting,
    /// or malformed JSON.
    Structure = 3,
    /// Redundant or incomplete index declaration.
    Index = 4,
}

impl Severity {
    /// Returns the process exit code for this category.
    #[must_use]
    pub fn exit_code(self) -> i32 {
        self as i32
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Security => write!(f, "security"),
            Self::Naming => write!(f, "naming"),
            Self::Structure => write!(f, "structure"),
            Self::Index => write!(f, "index"),
        }
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Kebab-case name of the check that fired (e.g., "no-permissive-rules").
    pub check: String,
    /// Fault category, also the exit code this finding maps to.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
    /// Source line (1-indexed), present only for text-scanned findings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Optional remediation hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Finding {
    /// Creates a new finding without a line or suggestion.
    #[must_use]
    pub fn new(check: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            check: check.into(),
            severity,
            message: message.into(),
            line: None,
            suggestion: None,
        }
    }

    /// Attaches a 1-indexed source line.
    #[must_use]
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Attaches a remediation hint.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Formats the finding for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = match self.line {
            Some(line) => format!("[{}] (line {}) {}", self.severity, line, self.message),
            None => format!("[{}] {}", self.severity, self.message),
        };
        if let Some(suggestion) = &self.suggestion {
            let _ = write!(output, "\n  = help: {suggestion}");
        }
        output
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {}: {} [{}] {}", line, self.severity, self.check, self.message),
            None => write!(f, "{} [{}] {}", self.severity, self.check, self.message),
        }
    }
}

/// Result of one validation pass over a single artifact.
///
/// Each checker invocation returns its own result; results are never shared
/// between artifacts, so a project-wide run cannot leak findings from one
/// file into another's report.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    /// All findings, in check order.
    pub findings: Vec<Finding>,
    /// Non-fatal warnings. Never affect the exit code.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finding.
    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Records a non-fatal warning.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Returns true if no findings were recorded (warnings do not fail).
    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.findings.is_empty()
    }

    /// Returns the worst fault category recorded, or `Success`.
    #[must_use]
    pub fn worst_severity(&self) -> Severity {
        self.findings
            .iter()
            .map(|f| f.severity)
            .max()
            .unwrap_or(Severity::Success)
    }

    /// Returns the process exit code: 0 when clean, else the maximum
    /// severity value among all findings.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.worst_severity().exit_code()
    }
}
