//! Link classification utilities.

use std::fmt;

use crate::utils::path::{is_external_link, split_link};

/// Syntactic classification of links found in documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// External link with URL scheme (https://, mailto:, tel:, etc.)
    External(&'a str),
    /// Pure fragment/anchor link (#section). Value is anchor without `#`.
    Fragment(&'a str),
    /// Site-root-relative path (/docs/intro).
    SiteRoot(&'a str),
    /// File-relative link to a Markdown source (./install.md, ../a/b.mdx#x).
    MarkdownFile(&'a str),
    /// Any other relative link, resolved against the page route (config, ../img.png).
    Relative(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Parse a link string into its syntactic kind.
    #[inline]
    pub fn parse(link: &'a str) -> Self {
        if is_external_link(link) {
            Self::External(link)
        } else if let Some(anchor) = link.strip_prefix('#') {
            Self::Fragment(anchor)
        } else if let Some(anchor) = link.strip_prefix("./#") {
            Self::Fragment(anchor)
        } else if link.starts_with('/') {
            Self::SiteRoot(link)
        } else if Self::is_markdown_path(link) {
            Self::MarkdownFile(link)
        } else {
            Self::Relative(link)
        }
    }

    /// Check if the path part of a link names a `.md`/`.mdx` file.
    #[inline]
    pub fn is_markdown_path(link: &str) -> bool {
        let (path, _) = split_link(link);
        let lower = path.to_ascii_lowercase();
        lower.ends_with(".md") || lower.ends_with(".mdx")
    }

    /// Which broken-link policy governs this link, `None` if it is never checked.
    pub fn class(&self) -> Option<LinkClass> {
        match self {
            Self::External(_) | Self::Fragment(_) => None,
            Self::MarkdownFile(_) => Some(LinkClass::Markdown),
            Self::SiteRoot(_) | Self::Relative(_) => Some(LinkClass::Doc),
        }
    }
}

/// Link class, each with its own broken-link policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LinkClass {
    /// Navbar/sidebar references and route links (`links.on_broken_links`).
    Doc,
    /// File-relative Markdown links (`links.on_broken_markdown_links`).
    Markdown,
}

impl fmt::Display for LinkClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Doc => f.write_str("doc"),
            Self::Markdown => f.write_str("markdown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_external() {
        assert!(matches!(
            LinkKind::parse("https://pathling.csiro.au"),
            LinkKind::External("https://pathling.csiro.au")
        ));
        assert!(matches!(
            LinkKind::parse("mailto:user@example.com"),
            LinkKind::External(_)
        ));
    }

    #[test]
    fn test_parse_fragment() {
        assert!(matches!(LinkKind::parse("#section"), LinkKind::Fragment("section")));
        assert!(matches!(LinkKind::parse("./#section"), LinkKind::Fragment("section")));
        assert!(matches!(LinkKind::parse("#"), LinkKind::Fragment("")));
    }

    #[test]
    fn test_parse_site_root() {
        assert!(matches!(
            LinkKind::parse("/docs/server#config"),
            LinkKind::SiteRoot("/docs/server#config")
        ));
    }

    #[test]
    fn test_parse_markdown_file() {
        assert!(matches!(
            LinkKind::parse("./install.md"),
            LinkKind::MarkdownFile("./install.md")
        ));
        assert!(matches!(
            LinkKind::parse("../fhirpath/functions.MDX#where"),
            LinkKind::MarkdownFile(_)
        ));
        assert!(matches!(LinkKind::parse("install.md?raw"), LinkKind::MarkdownFile(_)));
    }

    #[test]
    fn test_parse_relative() {
        assert!(matches!(LinkKind::parse("config"), LinkKind::Relative("config")));
        assert!(matches!(
            LinkKind::parse("../images/arch.png"),
            LinkKind::Relative("../images/arch.png")
        ));
    }

    #[test]
    fn test_class() {
        assert_eq!(LinkKind::parse("https://x.org").class(), None);
        assert_eq!(LinkKind::parse("#top").class(), None);
        assert_eq!(LinkKind::parse("/docs").class(), Some(LinkClass::Doc));
        assert_eq!(LinkKind::parse("a.md").class(), Some(LinkClass::Markdown));
        assert_eq!(LinkKind::parse("a").class(), Some(LinkClass::Doc));
    }
}
