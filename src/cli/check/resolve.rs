//! Link resolution against the content tree.
//!
//! Every reference the site makes is checked here: navbar items, sidebar
//! entries, and the links and images inside documents. Unresolved ones are
//! recorded in a [`LinkReport`] under their [`LinkClass`]; what happens to
//! them is decided by the policies afterwards.

use std::path::Path;

use crate::config::{NavItem, SiteConfig};
use crate::content::{ContentTree, Doc, ScannedLink, SidebarRef};
use crate::core::{LinkClass, LinkKind};
use crate::utils::path::{clean_path, clean_route, decode, join_route, split_link, to_slash};

use super::report::{BrokenLink, LinkReport};

/// Collect every broken link of the site.
pub fn collect_broken_links(config: &SiteConfig, tree: &ContentTree) -> LinkReport {
    let mut report = LinkReport::default();
    let resolver = Resolver { config, tree };

    resolver.check_navbar(&mut report);
    resolver.check_sidebars(&mut report);
    for doc in &tree.docs {
        for link in &doc.links {
            resolver.check_doc_link(doc, link, &mut report);
        }
    }
    report
}

struct Resolver<'a> {
    config: &'a SiteConfig,
    tree: &'a ContentTree,
}

impl Resolver<'_> {
    /// Navbar references, reported against the config file.
    fn check_navbar(&self, report: &mut LinkReport) {
        let source = self.config_source();
        for (i, item) in self.config.navbar.items.iter().enumerate() {
            let reason = |what: &str| format!("{what} (navbar.items[{i}])");
            match item {
                NavItem::Doc(item) => {
                    if self.tree.doc(&item.doc_id).is_none() {
                        let link = broken(&item.doc_id, None, reason("doc not found"));
                        report.add(LinkClass::Doc, &source, link);
                    }
                }
                NavItem::DocSidebar(item) => {
                    let found = match self.tree.sidebars.get(&item.sidebar_id) {
                        None => Some("sidebar not found"),
                        Some(_) => match self.tree.sidebars.first_doc(&item.sidebar_id) {
                            None => Some("sidebar has no documents"),
                            // Dangling ids inside sidebars are reported with the sidebar file
                            Some(_) => None,
                        },
                    };
                    if let Some(what) = found {
                        let link = broken(&item.sidebar_id, None, reason(what));
                        report.add(LinkClass::Doc, &source, link);
                    }
                }
                NavItem::Link(item) => {
                    if let Some(what) = self.check_href(&item.href) {
                        let link = broken(&item.href, None, reason(what));
                        report.add(LinkClass::Doc, &source, link);
                    }
                }
            }
        }
    }

    /// Doc ids and hrefs inside the sidebar file.
    fn check_sidebars(&self, report: &mut LinkReport) {
        let source = to_slash(&self.config.docs.sidebar);
        for (sidebar, reference) in self.tree.sidebars.references() {
            match reference {
                SidebarRef::Doc(id) => {
                    if self.tree.doc(id).is_none() {
                        let reason = format!("doc not found (sidebar '{sidebar}')");
                        report.add(LinkClass::Doc, &source, broken(id, None, reason));
                    }
                }
                SidebarRef::Href(href) => {
                    if let Some(what) = self.check_href(href) {
                        let reason = format!("{what} (sidebar '{sidebar}')");
                        report.add(LinkClass::Doc, &source, broken(href, None, reason));
                    }
                }
            }
        }
    }

    /// A link or image inside a document.
    fn check_doc_link(&self, doc: &Doc, link: &ScannedLink, report: &mut LinkReport) {
        let kind = LinkKind::parse(&link.dest);
        let Some(class) = kind.class() else {
            return;
        };
        let (path, _) = split_link(&link.dest);
        if path.is_empty() {
            return;
        }
        let path = decode(path);

        let failure = match kind {
            LinkKind::SiteRoot(_) => {
                (!self.tree.has_route(&self.site_route(&path))).then_some("not found")
            }
            LinkKind::MarkdownFile(_) => self.check_markdown_file(doc, &path),
            LinkKind::Relative(_) => {
                let route_ok = !link.image && self.tree.has_route(&join_route(&doc.route, &path));
                (!route_ok && !file_exists(doc, &path)).then_some("not found")
            }
            LinkKind::External(_) | LinkKind::Fragment(_) => None,
        };

        if let Some(reason) = failure {
            report.add(class, &doc.source, broken(&link.dest, Some(link.line), reason));
        }
    }

    /// A file-relative `.md`/`.mdx` link must land on a document.
    fn check_markdown_file(&self, doc: &Doc, path: &str) -> Option<&'static str> {
        let Some(dir) = doc.path.parent() else {
            return Some("not found");
        };
        let Some(target) = clean_path(&dir.join(path)) else {
            return Some("points outside the file system root");
        };
        if self.tree.doc_by_path(&target).is_some() {
            None
        } else if target.is_file() {
            Some("is not a document")
        } else {
            Some("file not found")
        }
    }

    /// Navbar or sidebar href: external links pass, site-root paths must be served.
    fn check_href(&self, href: &str) -> Option<&'static str> {
        match LinkKind::parse(href) {
            LinkKind::External(_) | LinkKind::Fragment(_) => None,
            _ => {
                let (path, _) = split_link(href);
                let route = self.site_route(&decode(path));
                (!self.tree.has_route(&route)).then_some("route not found")
            }
        }
    }

    /// Site-root path as served: prefixed with the base URL unless already under it.
    fn site_route(&self, path: &str) -> String {
        let base_url = self.config.site.base_url.as_str();
        let route = clean_route(path);
        let base = clean_route(base_url);
        if base == "/" || route == base || route.starts_with(&format!("{base}/")) {
            route
        } else {
            clean_route(&format!("{base_url}{path}"))
        }
    }

    fn config_source(&self) -> String {
        self.config
            .config_path
            .file_name()
            .map_or_else(|| "site.toml".to_string(), |name| name.to_string_lossy().into_owned())
    }
}

/// Relative link naming a file next to the document (colocated images).
fn file_exists(doc: &Doc, path: &str) -> bool {
    doc.path
        .parent()
        .and_then(|dir| clean_path(&dir.join(Path::new(path))))
        .is_some_and(|p| p.is_file())
}

fn broken(target: &str, line: Option<usize>, reason: impl Into<String>) -> BrokenLink {
    BrokenLink {
        target: target.to_string(),
        line,
        reason: reason.into(),
    }
}
