//! Broken link report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::core::LinkClass;
use crate::utils::plural_s;

/// A single unresolved link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenLink {
    /// The link as written.
    pub target: String,
    /// 1-based source line, when the link comes from a document.
    pub line: Option<usize>,
    /// Why it did not resolve.
    pub reason: String,
}

impl fmt::Display for BrokenLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(line) = self.line {
            write!(f, "{} ", format!("L{line}").dimmed())?;
        }
        write!(f, "`{}`", self.target)?;
        if !self.reason.is_empty() {
            write!(f, " {}", self.reason)?;
        }
        Ok(())
    }
}

/// Broken links per class, grouped by source file.
#[derive(Debug, Default)]
pub struct LinkReport {
    pub doc: BTreeMap<String, Vec<BrokenLink>>,
    pub markdown: BTreeMap<String, Vec<BrokenLink>>,
}

impl LinkReport {
    pub fn add(&mut self, class: LinkClass, source: impl Into<String>, link: BrokenLink) {
        self.class_mut(class)
            .entry(source.into())
            .or_default()
            .push(link);
    }

    pub fn class(&self, class: LinkClass) -> &BTreeMap<String, Vec<BrokenLink>> {
        match class {
            LinkClass::Doc => &self.doc,
            LinkClass::Markdown => &self.markdown,
        }
    }

    fn class_mut(&mut self, class: LinkClass) -> &mut BTreeMap<String, Vec<BrokenLink>> {
        match class {
            LinkClass::Doc => &mut self.doc,
            LinkClass::Markdown => &mut self.markdown,
        }
    }

    /// Broken link count of one class.
    pub fn error_count(&self, class: LinkClass) -> usize {
        self.class(class).values().map(Vec::len).sum()
    }

    #[cfg(test)]
    pub fn total(&self) -> usize {
        self.error_count(LinkClass::Doc) + self.error_count(LinkClass::Markdown)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterate `(source, link)` pairs of one class in report order.
    pub fn iter(&self, class: LinkClass) -> impl Iterator<Item = (&str, &BrokenLink)> {
        self.class(class)
            .iter()
            .flat_map(|(source, links)| links.iter().map(move |l| (source.as_str(), l)))
    }

    /// Print one class to stderr, grouped by source.
    pub fn print_class(&self, class: LinkClass) {
        let errors = self.class(class);
        if errors.is_empty() {
            return;
        }
        eprintln!();

        let file_count = errors.len();
        let error_count = self.error_count(class);
        eprintln!(
            "{} {}",
            format!("{class} links").red().bold(),
            format!(
                "({file_count} file{}, {error_count} broken)",
                plural_s(file_count)
            )
            .dimmed()
        );

        for (source, links) in errors {
            eprintln!("{}{}{}", "[".dimmed(), source.cyan(), "]".dimmed());
            for link in links {
                eprintln!("{} {link}", "→".red());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn broken(target: &str, line: Option<usize>) -> BrokenLink {
        BrokenLink {
            target: target.into(),
            line,
            reason: "not found".into(),
        }
    }

    #[test]
    fn test_grouping_and_counts() {
        let mut report = LinkReport::default();
        report.add(LinkClass::Doc, "site.toml", broken("missing", None));
        report.add(LinkClass::Markdown, "docs/a.md", broken("./b.md", Some(3)));
        report.add(LinkClass::Markdown, "docs/a.md", broken("./c.md", Some(9)));

        assert_eq!(report.error_count(LinkClass::Doc), 1);
        assert_eq!(report.error_count(LinkClass::Markdown), 2);
        assert_eq!(report.markdown.len(), 1);
        assert_eq!(report.total(), 3);

        let targets: Vec<_> = report
            .iter(LinkClass::Markdown)
            .map(|(source, l)| format!("{source} {}", l.target))
            .collect();
        assert_eq!(targets, ["docs/a.md ./b.md", "docs/a.md ./c.md"]);
    }

    #[test]
    fn test_display() {
        let shown = broken("./b.md", Some(3)).to_string();
        assert!(shown.contains("L3"));
        assert!(shown.ends_with("`./b.md` not found"));
        assert_eq!(broken("index", None).to_string(), "`index` not found");
    }
}
