//! Small helpers shared across commands.
//!
//! - [`path`]: link splitting, route joining and path normalization

pub mod path;

/// Return "s" suffix for plural counts
///
/// - `plural_s(0)` -> `"s"`
/// - `plural_s(1)` -> `""`
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization (`3 documents`).
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}
