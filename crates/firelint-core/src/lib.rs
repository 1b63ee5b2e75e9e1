//! # firelint-core
//!
//! Core types for firelint, a static validator for Firestore configuration
//! artifacts (security rules, composite indexes, collection schemas).
//!
//! This crate provides:
//!
//! - [`Finding`] and [`ValidationResult`] for structured check output
//! - [`Severity`] encoding the fault-category / exit-code policy
//! - [`naming`] with the collection naming grammar
//! - [`document`] with the index and schema document model
//! - [`CheckError`] for load failures
//!
//! The checkers themselves live in `firelint-rules`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Document model for index and schema files.
pub mod document;
mod error;
/// Collection naming grammar.
pub mod naming;
mod types;

pub use error::{read_artifact, CheckError};
pub use types::{Finding, Severity, ValidationResult};
