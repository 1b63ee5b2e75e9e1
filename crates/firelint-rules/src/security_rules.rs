//! Line-oriented security checks over Firestore rules text.
//!
//! # Rationale
//!
//! The scanner matches patterns against raw lines instead of parsing the
//! rules language into statements. This is a precision/cost trade-off with a
//! known blind spot: an authentication predicate placed more than
//! [`SecurityRulesScanner::lookahead`] lines after a write grant is missed.
//! A stricter implementation would need a statement-level parser that scopes
//! predicates to their match block.

use firelint_core::{read_artifact, CheckError, Finding, Severity, ValidationResult};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Check name: flat `allow read, write: if true` grants and wildcard allows.
pub const NO_PERMISSIVE_RULES: &str = "no-permissive-rules";

/// Check name: combined read/write grants without an auth predicate.
pub const NO_COMBINED_PERMISSIONS: &str = "no-combined-permissions";

/// Check name: write-class grants with no auth predicate in reach.
pub const REQUIRE_AUTH_FOR_WRITES: &str = "require-auth-for-writes";

/// Substrings recognized as authentication predicates.
pub const AUTH_PREDICATES: [&str; 3] = ["request.auth", "isAdmin", "isLandlord"];

static PERMISSIVE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // pattern is a literal, cannot fail
    Regex::new(r"(?i)allow\s+read,\s*write:\s*if\s+true").expect("valid pattern")
});

static WILDCARD_ALLOW: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"(?i)match\s+/\{document=\*\*\}.*allow").expect("valid pattern")
});

static COMBINED_GRANT: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"allow\s+read,\s*write:").expect("valid pattern")
});

static WRITE_GRANT: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"allow\s+(write|create|update|delete):").expect("valid pattern")
});

static WILDCARD_MATCH: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"match\s+/\{document=\*\*\}").expect("valid pattern")
});

static WILDCARD_DENIED: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"match\s+/\{document=\*\*\}[^}]*if\s+false").expect("valid pattern")
});

fn has_auth_predicate(text: &str) -> bool {
    AUTH_PREDICATES.iter().any(|p| text.contains(p))
}

/// Scans Firestore rules text for security misconfigurations.
///
/// Checks are independent and never short-circuit each other: a single line
/// can contribute findings from multiple checks. Findings are ordered by
/// line, then by check order within a line.
#[derive(Debug, Clone)]
pub struct SecurityRulesScanner {
    /// Number of lines after a write grant searched for an auth predicate.
    pub lookahead: usize,
}

impl Default for SecurityRulesScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl SecurityRulesScanner {
    /// Creates a scanner with the default 3-line auth lookahead.
    #[must_use]
    pub fn new() -> Self {
        Self { lookahead: 3 }
    }

    /// Scans rules text and returns all findings plus non-fatal warnings.
    #[must_use]
    pub fn check(&self, content: &str) -> ValidationResult {
        let mut result = ValidationResult::new();
        let lines: Vec<&str> = content.split('\n').collect();

        for (i, line) in lines.iter().enumerate() {
            let lineno = i + 1;
            self.check_permissive(line, lineno, &mut result);
            self.check_combined(line, lineno, &mut result);
            self.check_auth_requirement(&lines, i, &mut result);
        }

        self.check_wildcard(content, &mut result);
        result
    }

    fn check_permissive(&self, line: &str, lineno: usize, result: &mut ValidationResult) {
        let patterns: [(&Regex, &str); 2] = [
            (
                &PERMISSIVE,
                "Overly permissive rule: 'allow read, write: if true'",
            ),
            (&WILDCARD_ALLOW, "Wildcard match with allow - review carefully"),
        ];

        for (pattern, message) in patterns {
            if pattern.is_match(line) {
                result.push(
                    Finding::new(NO_PERMISSIVE_RULES, Severity::Security, message)
                        .at_line(lineno)
                        .with_suggestion(
                            "Restrict access to authenticated users or specific conditions",
                        ),
                );
            }
        }
    }

    fn check_combined(&self, line: &str, lineno: usize, result: &mut ValidationResult) {
        if COMBINED_GRANT.is_match(line) && !has_auth_predicate(line) {
            result.push(
                Finding::new(
                    NO_COMBINED_PERMISSIONS,
                    Severity::Security,
                    "Combined read/write permission without authentication check",
                )
                .at_line(lineno)
                .with_suggestion(
                    "Separate read and write rules or add authentication requirement",
                ),
            );
        }
    }

    fn check_auth_requirement(&self, lines: &[&str], i: usize, result: &mut ValidationResult) {
        let line = lines[i];
        if !WRITE_GRANT.is_match(line) || line.contains("if false") {
            return;
        }

        // The grant line itself plus the lookahead window, clipped at EOF.
        // Tolerates rule styles that put the condition on a following line.
        let end = (i + 1 + self.lookahead).min(lines.len());
        let window_has_auth = lines[i..end].iter().any(|l| has_auth_predicate(l));

        if !window_has_auth {
            result.push(
                Finding::new(
                    REQUIRE_AUTH_FOR_WRITES,
                    Severity::Security,
                    "Write operation without authentication requirement",
                )
                .at_line(i + 1)
                .with_suggestion(
                    "Add 'request.auth != null' or 'request.auth.uid == userId' condition",
                ),
            );
        }
    }

    fn check_wildcard(&self, content: &str, result: &mut ValidationResult) {
        if WILDCARD_MATCH.is_match(content) && !WILDCARD_DENIED.is_match(content) {
            result.warn("Wildcard match found - ensure it has appropriate restrictions");
        }
    }
}

/// Loads a rules file and scans it with default settings.
///
/// # Errors
///
/// Returns [`CheckError`] if the file is absent or unreadable.
pub fn check_rules_file(path: &Path) -> Result<ValidationResult, CheckError> {
    let content = read_artifact(path)?;
    tracing::debug!("Scanning security rules: {}", path.display());
    Ok(SecurityRulesScanner::new().check(&content))
}
