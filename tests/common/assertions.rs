//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating codebox command output and error messages.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for a failed listing fetch
pub fn fetch_failed() -> impl Predicate<str> {
    predicates::str::contains("Failed to fetch repository listing")
}

/// Creates a predicate that checks for numbered file indices
pub fn has_file_index(index: u32) -> impl Predicate<str> {
    predicates::str::contains(format!("[{}]", index))
}

/// Creates a predicate that checks for the editor heading of `path`
pub fn shows_file(path: &str, mode: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("➤ {} [{}]", path, mode))
}

/// Creates a predicate that checks for the repository header
pub fn has_repository_header() -> impl Predicate<str> {
    predicates::str::contains("Repository: o/r (main)")
}
