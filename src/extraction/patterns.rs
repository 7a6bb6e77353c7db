//! Ordered pattern tables
//!
//! Every field extractor is plain data (an ordered list of compiled patterns
//! held in a `LazyLock`) plus the single first-match routine below. Tables
//! are compiled once on first use and only read afterwards, so concurrent
//! extractions share them without synchronization.

use regex::{Captures, Regex};

/// Date sub-pattern shared by every dated label: `12-Jan-2024`, `5/Mar/24 10:30 am`
pub(crate) const DATE: &str = r"(\d{1,2}[-/]\w{3}[-/]\d{2,4}(?:\s+\d{1,2}:\d{2}(?:\s*[ap]m)?)?)";

/// Compiles a built-in table pattern.
///
/// Tables are string literals; each module's tests force its tables so a bad
/// literal fails the test suite rather than a caller.
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in extraction pattern must compile")
}

/// Compiles a list of built-in patterns, preserving order.
pub(crate) fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| compile(p)).collect()
}

/// Tries `patterns` in order and returns the first accepted candidate.
///
/// Only the first match of each pattern is considered. When `accept` rejects
/// it (a malformed candidate) the next pattern is tried; no error escapes.
pub(crate) fn first_accepted<T>(
    patterns: &[Regex],
    text: &str,
    mut accept: impl FnMut(&Captures<'_>) -> Option<T>,
) -> Option<T> {
    patterns
        .iter()
        .find_map(|re| re.captures(text).and_then(|caps| accept(&caps)))
}

/// Trimmed first capture group of the first pattern that yields a non-empty one.
pub(crate) fn first_capture(patterns: &[Regex], text: &str) -> Option<String> {
    first_accepted(patterns, text, |caps| non_empty(caps.get(1)?.as_str()))
}

/// Whole matched text of the first matching pattern.
pub(crate) fn first_match(patterns: &[Regex], text: &str) -> Option<String> {
    first_accepted(patterns, text, |caps| non_empty(caps.get(0)?.as_str()))
}

/// Trims `s`, mapping an empty result to `None`.
pub(crate) fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Optional capture group as a string slice, empty when it did not participate.
pub(crate) fn group<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}
