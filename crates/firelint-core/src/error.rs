//! Load errors for validation inputs.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading an artifact from disk.
///
/// Note that malformed JSON is not an error: parse failures are reported as
/// a synthetic structure finding so a project-wide run can continue with the
/// next artifact.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The input file does not exist.
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// The input file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Reads a file to a string, mapping a missing file to [`CheckError::NotFound`].
///
/// # Errors
///
/// Returns an error if the file is absent or unreadable.
pub fn read_artifact(path: &std::path::Path) -> Result<String, CheckError> {
    if !path.exists() {
        return Err(CheckError::NotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|source| CheckError::Io {
        path: path.to_path_buf(),
        source,
    })
}
