//! Path and URL utilities.
//!
//! Pure functions, except [`normalize_path`] which consults the filesystem.

use percent_encoding::percent_decode_str;
use std::path::{Component, Path, PathBuf};

/// Check whether a link carries a URL scheme (`https:`, `mailto:`, `tel:` ...).
///
/// ```ignore
/// assert!(is_external_link("https://example.com"));
/// assert!(!is_external_link("/docs/intro"));
/// ```
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Split a link into `(path, fragment)`, dropping any query string.
///
/// `"/docs/a?x=1#top"` -> `("/docs/a", "top")`
#[inline]
pub fn split_link(link: &str) -> (&str, &str) {
    let (rest, fragment) = link.split_once('#').unwrap_or((link, ""));
    let path = rest.split_once('?').map_or(rest, |(p, _)| p);
    (path, fragment)
}

/// Percent-decode a link path (`my%20doc.md` -> `my doc.md`).
pub fn decode(path: &str) -> String {
    percent_decode_str(path).decode_utf8_lossy().into_owned()
}

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first, falling back to joining with the current
/// directory when the path does not exist.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Lexically resolve `.` and `..` components without touching the disk.
///
/// Returns `None` when `..` climbs above the start of the path.
pub fn clean_path(path: &Path) -> Option<PathBuf> {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    return None;
                }
            }
            other => out.push(other),
        }
    }
    Some(out)
}

/// Canonical form of a route for comparisons: leading `/`, no trailing `/`,
/// no empty or `.` segments, `..` applied.
///
/// `"/docs//encoders/"` -> `"/docs/encoders"`, `"/"` -> `"/"`
pub fn clean_route(route: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in route.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    format!("/{}", segments.join("/"))
}

/// Resolve a relative URL against the route of the page it appears on.
///
/// Browser semantics: the last segment of `base` is replaced unless `base`
/// ends with `/`.
pub fn join_route(base: &str, relative: &str) -> String {
    let dir = match base.rfind('/') {
        Some(pos) => &base[..=pos],
        None => "/",
    };
    clean_route(&format!("{dir}{relative}"))
}

/// Convert a relative filesystem path to a `/`-separated string.
pub fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://github.com/aehrc/pathling"));
        assert!(is_external_link("mailto:someone@example.com"));
        assert!(!is_external_link("/docs/intro"));
        assert!(!is_external_link("./install.md"));
        assert!(!is_external_link(":nothing"));
    }

    #[test]
    fn test_split_link() {
        assert_eq!(split_link("/docs/a#top"), ("/docs/a", "top"));
        assert_eq!(split_link("/docs/a?x=1#top"), ("/docs/a", "top"));
        assert_eq!(split_link("./b.md"), ("./b.md", ""));
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("my%20doc.md"), "my doc.md");
        assert_eq!(decode("plain.md"), "plain.md");
    }

    #[test]
    fn test_clean_path() {
        assert_eq!(
            clean_path(Path::new("a/b/../c/./d.md")),
            Some(PathBuf::from("a/c/d.md"))
        );
        assert_eq!(clean_path(Path::new("../escape.md")), None);
    }

    #[test]
    fn test_clean_route() {
        assert_eq!(clean_route("/docs//encoders/"), "/docs/encoders");
        assert_eq!(clean_route("/"), "/");
        assert_eq!(clean_route(""), "/");
        assert_eq!(clean_route("/docs/a/../b"), "/docs/b");
    }

    #[test]
    fn test_join_route() {
        assert_eq!(join_route("/docs/server/intro", "config"), "/docs/server/config");
        assert_eq!(join_route("/docs/server/", "config"), "/docs/server/config");
        assert_eq!(join_route("/docs/server/intro", "../fhirpath"), "/docs/fhirpath");
    }

    #[test]
    fn test_to_slash() {
        assert_eq!(to_slash(Path::new("encoders/index")), "encoders/index");
        assert_eq!(to_slash(Path::new("./a/b")), "a/b");
    }
}
