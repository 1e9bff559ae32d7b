//! Link extraction from Markdown sources.

use pulldown_cmark::{Event, LinkType, Options, Parser, Tag};

/// A link or image destination found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLink {
    /// Destination as written.
    pub dest: String,
    /// `![..](..)` rather than `[..](..)`.
    pub image: bool,
    /// 1-based line in the source file.
    pub line: usize,
}

/// Extract link and image destinations from a Markdown body.
///
/// `line_offset` is the number of lines preceding `body` in the file
/// (front matter), so reported lines match the source.
pub fn scan_links(body: &str, line_offset: usize) -> Vec<ScannedLink> {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_FOOTNOTES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TASKLISTS);
    opts.insert(Options::ENABLE_HEADING_ATTRIBUTES);

    let mut links = Vec::new();
    for (event, range) in Parser::new_ext(body, opts).into_offset_iter() {
        let (link_type, dest, image) = match event {
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                ..
            }) => (link_type, dest_url, false),
            Event::Start(Tag::Image {
                link_type,
                dest_url,
                ..
            }) => (link_type, dest_url, true),
            _ => continue,
        };
        // Email autolinks carry a bare address without `mailto:`
        if matches!(link_type, LinkType::Email) || dest.is_empty() {
            continue;
        }
        let line = line_offset + body[..range.start].matches('\n').count() + 1;
        links.push(ScannedLink {
            dest: dest.into_string(),
            image,
            line,
        });
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_and_images() {
        let body = "# Title\n\nSee [install](./install.md) and ![arch](../images/arch.png).\n\n\
                    Visit <https://pathling.csiro.au>.\n";
        let links = scan_links(body, 0);
        let dests: Vec<_> = links.iter().map(|l| l.dest.as_str()).collect();
        assert_eq!(
            dests,
            ["./install.md", "../images/arch.png", "https://pathling.csiro.au"]
        );
        assert!(!links[0].image);
        assert!(links[1].image);
        assert_eq!(links[0].line, 3);
        assert_eq!(links[2].line, 5);
    }

    #[test]
    fn test_line_offset() {
        let links = scan_links("[a](/docs/a)\n", 4);
        assert_eq!(links[0].line, 5);
    }

    #[test]
    fn test_reference_links_resolved() {
        let body = "Read the [guide][g].\n\n[g]: ../server/index.md\n";
        let links = scan_links(body, 0);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].dest, "../server/index.md");
    }

    #[test]
    fn test_code_and_email_ignored() {
        let body = "`[not](a.md)`\n\n```\n[nor](b.md)\n```\n\n<someone@example.com>\n";
        assert!(scan_links(body, 0).is_empty());
    }
}
