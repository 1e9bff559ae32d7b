//! Config field path.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// Dotted path of a config field, as written in `site.toml`.
///
/// Static paths cost nothing; indexed paths (navbar items, locales) are
/// built with [`FieldPath::index`] and [`FieldPath::join`].
///
/// ```ignore
/// let item = FieldPath::new("navbar.items").index(2).join("label");
/// assert_eq!(item.as_str(), "navbar.items[2].label");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Path computed at runtime (e.g. reported by the deserializer).
    pub fn owned(path: impl Into<String>) -> Self {
        Self(Cow::Owned(path.into()))
    }

    /// Append a child key.
    pub fn join(&self, key: &str) -> Self {
        Self(Cow::Owned(format!("{}.{}", self.0, key)))
    }

    /// Append an array index.
    pub fn index(&self, i: usize) -> Self {
        Self(Cow::Owned(format!("{}[{}]", self.0, i)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_path() {
        let path = FieldPath::new("navbar.items").index(2).join("label");
        assert_eq!(path.as_str(), "navbar.items[2].label");
    }

    #[test]
    fn test_display_quotes_path() {
        let shown = FieldPath::new("site.url").to_string();
        assert!(shown.contains("`site.url`"));
    }
}
