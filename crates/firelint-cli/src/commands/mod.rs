//! CLI command implementations.

pub mod check;
pub mod list_checks;
pub mod output;
pub mod project;
pub mod report;
