//! Whole-project validation: artifact discovery and exit-code folding.

use crate::{check_indexes_file, check_rules_file, check_schema_file};
use firelint_core::{CheckError, ValidationResult};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during a project run.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// Schema file search pattern could not be built.
    #[error("invalid search pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// An artifact could not be loaded.
    #[error(transparent)]
    Check(#[from] CheckError),
}

/// Kind of configuration artifact discovered in a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Security rules text (`firestore.rules`).
    Rules,
    /// Composite index declarations (`firestore.indexes.json`).
    Indexes,
    /// Collection schema definition (`*.schema.json`).
    Schema,
}

impl ArtifactKind {
    /// Human-readable label used in output headers.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Rules => "security rules",
            Self::Indexes => "indexes",
            Self::Schema => "schema",
        }
    }
}

/// One validated artifact within a project run.
#[derive(Debug, Serialize)]
pub struct ArtifactReport {
    /// Path to the artifact.
    pub path: PathBuf,
    /// What kind of artifact it is.
    pub kind: ArtifactKind,
    /// The checker's result, owned by this artifact alone.
    pub result: ValidationResult,
}

/// Outcome of validating a whole project directory.
#[derive(Debug, Serialize)]
pub struct ProjectReport {
    /// Project root that was scanned.
    pub root: PathBuf,
    /// Per-artifact results, in discovery order: rules, indexes, then
    /// schema files sorted by path.
    pub artifacts: Vec<ArtifactReport>,
}

impl ProjectReport {
    /// Folds per-artifact exit codes with maximum.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.artifacts
            .iter()
            .map(|a| a.result.exit_code())
            .max()
            .unwrap_or(0)
    }

    /// Returns true if every artifact passed.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.artifacts.iter().all(|a| a.result.is_pass())
    }

    /// Total findings across all artifacts.
    #[must_use]
    pub fn finding_count(&self) -> usize {
        self.artifacts.iter().map(|a| a.result.findings.len()).sum()
    }

    /// Total warnings across all artifacts.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.artifacts.iter().map(|a| a.result.warnings.len()).sum()
    }
}

/// Validates every recognized artifact under `root`.
///
/// Looks for `firestore.rules`, `firestore.indexes.json`, and any
/// `*.schema.json` file in the tree. Each artifact is checked with its own
/// result; a parse failure in one never aborts the rest.
///
/// # Errors
///
/// Returns an error if the schema search pattern is invalid or a discovered
/// artifact disappears before it can be read.
pub fn validate_project(root: &Path) -> Result<ProjectReport, ProjectError> {
    info!("Validating project: {}", root.display());
    let mut artifacts = Vec::new();

    let rules_file = root.join("firestore.rules");
    if rules_file.exists() {
        let result = check_rules_file(&rules_file)?;
        artifacts.push(ArtifactReport {
            path: rules_file,
            kind: ArtifactKind::Rules,
            result,
        });
    }

    let indexes_file = root.join("firestore.indexes.json");
    if indexes_file.exists() {
        let result = check_indexes_file(&indexes_file)?;
        artifacts.push(ArtifactReport {
            path: indexes_file,
            kind: ArtifactKind::Indexes,
            result,
        });
    }

    for schema_file in discover_schema_files(root)? {
        let result = check_schema_file(&schema_file)?;
        artifacts.push(ArtifactReport {
            path: schema_file,
            kind: ArtifactKind::Schema,
            result,
        });
    }

    info!(
        "Validated {} artifact(s), {} finding(s)",
        artifacts.len(),
        artifacts.iter().map(|a| a.result.findings.len()).sum::<usize>()
    );

    Ok(ProjectReport {
        root: root.to_path_buf(),
        artifacts,
    })
}

/// Finds all `*.schema.json` files under `root`, sorted for deterministic
/// output ordering.
fn discover_schema_files(root: &Path) -> Result<Vec<PathBuf>, ProjectError> {
    let pattern = format!("{}/**/*.schema.json", root.display());
    let mut files = Vec::new();

    for entry in glob::glob(&pattern)? {
        match entry {
            Ok(path) => files.push(path),
            Err(e) => debug!("Skipping unreadable path during discovery: {e}"),
        }
    }

    files.sort();
    Ok(files)
}
