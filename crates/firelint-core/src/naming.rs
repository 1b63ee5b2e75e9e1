//! Collection naming convention.
//!
//! Accepted names start with a lowercase ASCII letter and continue in either
//! camelCase or snake_case: `users`, `userProfiles`, `user_profiles`.
//! Leading uppercase, leading digits, punctuation, and dangling or doubled
//! underscores are rejected.

use regex::Regex;
use std::sync::LazyLock;

/// Check name reported for naming findings.
pub const CHECK_NAME: &str = "collection-naming";

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // pattern is a literal, cannot fail
    Regex::new(r"^[a-z][a-zA-Z0-9]*(_[a-z0-9]+)*$").expect("naming pattern is valid")
});

/// Returns true if `name` follows the collection naming convention.
#[must_use]
pub fn is_valid_collection_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}
