//! Content tree: the documents, sidebars, pages and static files the
//! configuration points at.
//!
//! Only existence is established here (ids, routes, files); rendering is
//! the build tool's job.
//!
//! - [`doc`]: document ids, routes and front matter
//! - [`scan`]: link extraction from Markdown
//! - [`sidebar`]: sidebar structure file

pub mod doc;
pub mod scan;
pub mod sidebar;

pub use doc::{Doc, FrontMatter};
pub use scan::ScannedLink;
pub use sidebar::{SidebarEntry, SidebarRef, Sidebars};

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use jwalk::WalkDir;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::config::SiteConfig;
use crate::utils::path::{clean_route, normalize_path, to_slash};
use crate::{debug, log};

/// Extensions treated as documents.
const DOC_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Extensions that produce a route under the pages directory.
const PAGE_EXTENSIONS: [&str; 7] = ["md", "mdx", "html", "js", "jsx", "ts", "tsx"];

/// Everything link checking needs to know about the site's content.
#[derive(Debug, Default)]
pub struct ContentTree {
    /// Documents sorted by id.
    pub docs: Vec<Doc>,
    pub sidebars: Sidebars,
    /// Doc id -> index into `docs`.
    ids: FxHashMap<String, usize>,
    /// Absolute source path -> index into `docs`.
    sources: FxHashMap<PathBuf, usize>,
    /// Every served route in canonical form (see [`clean_route`]).
    routes: FxHashSet<String>,
}

impl ContentTree {
    /// Load documents, sidebars, pages and static files named by `config`.
    pub fn load(config: &SiteConfig) -> Result<Self> {
        let docs_dir = normalize_path(&config.root_join(&config.docs.path));
        let docs = if docs_dir.is_dir() {
            load_docs(&docs_dir, config)?
        } else {
            log!("warning"; "docs directory '{}' not found", config.docs.path.display());
            Vec::new()
        };

        let sidebars = Sidebars::load(&config.root_join(&config.docs.sidebar))?;

        let mut tree = Self::from_docs(docs, sidebars)?;

        let base_url = config.site.base_url.as_str();
        let pages_dir = config.root_join(&config.theme.pages);
        for rel in walk_files(&pages_dir, true) {
            if let Some(route) = page_route(&rel, base_url) {
                tree.routes.insert(route);
            }
        }
        for dir in &config.theme.static_dirs {
            for rel in walk_files(&config.root_join(dir), false) {
                tree.routes
                    .insert(clean_route(&format!("{base_url}/{}", to_slash(&rel))));
            }
        }

        debug!(
            "content";
            "{} docs, {} sidebars, {} routes",
            tree.docs.len(),
            tree.sidebars.sidebars.len(),
            tree.routes.len()
        );
        Ok(tree)
    }

    /// Index a set of documents; fails on duplicate ids.
    pub fn from_docs(mut docs: Vec<Doc>, sidebars: Sidebars) -> Result<Self> {
        docs.sort_by(|a, b| a.id.cmp(&b.id));

        let mut ids = FxHashMap::default();
        let mut sources = FxHashMap::default();
        let mut routes = FxHashSet::default();
        for (i, doc) in docs.iter().enumerate() {
            if let Some(prev) = ids.insert(doc.id.clone(), i) {
                bail!(
                    "duplicate doc id '{}' in '{}' and '{}'",
                    doc.id,
                    docs[prev].source,
                    doc.source
                );
            }
            sources.insert(doc.path.clone(), i);
            routes.insert(doc.route.clone());
        }

        Ok(Self {
            docs,
            sidebars,
            ids,
            sources,
            routes,
        })
    }

    pub fn doc(&self, id: &str) -> Option<&Doc> {
        self.ids.get(id).map(|&i| &self.docs[i])
    }

    /// Document whose source file is `path` (absolute, `.`/`..` resolved).
    pub fn doc_by_path(&self, path: &Path) -> Option<&Doc> {
        self.sources.get(path).map(|&i| &self.docs[i])
    }

    /// Whether anything is served at `route` (any form; it is canonicalized).
    pub fn has_route(&self, route: &str) -> bool {
        self.routes.contains(&clean_route(route))
    }
}

/// Read every document under `docs_dir` in parallel.
fn load_docs(docs_dir: &Path, config: &SiteConfig) -> Result<Vec<Doc>> {
    let route_prefix = config.docs_route_prefix();
    let files: Vec<PathBuf> = walk_files(docs_dir, true)
        .into_iter()
        .filter(|rel| has_extension(rel, &DOC_EXTENSIONS))
        .collect();

    files
        .par_iter()
        .map(|rel| -> Result<Doc> {
            let path = docs_dir.join(rel);
            let source = fs::read_to_string(&path)
                .with_context(|| format!("failed to read '{}'", path.display()))?;
            let (front, body) = FrontMatter::extract(&source);
            let line_offset = source[..source.len() - body.len()].matches('\n').count();

            let mut doc = Doc::new(rel, &route_prefix, &front);
            doc.source = to_slash(&config.root_relative(&path));
            doc.links = scan::scan_links(body, line_offset);
            doc.path = path;
            Ok(doc)
        })
        .collect()
}

/// Files below `dir`, relative to it, sorted. Hidden entries are skipped.
/// With `skip_underscore`, so is anything under a `_`-prefixed file or
/// directory name. A missing directory yields nothing.
fn walk_files(dir: &Path, skip_underscore: bool) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .skip_hidden(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.path().strip_prefix(dir).ok().map(Path::to_path_buf))
        .filter(|rel| !(skip_underscore && is_partial(rel)))
        .collect();
    files.sort();
    files
}

/// Whether any component of `rel` starts with `_`.
fn is_partial(rel: &Path) -> bool {
    rel.components()
        .any(|c| c.as_os_str().to_string_lossy().starts_with('_'))
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
}

/// Route of a file under the pages directory, `None` for non-page files.
fn page_route(rel: &Path, base_url: &str) -> Option<String> {
    if !has_extension(rel, &PAGE_EXTENSIONS) {
        return None;
    }
    let id = to_slash(&rel.with_extension(""));
    Some(clean_route(&format!("{base_url}/{}", doc::strip_index(&id))))
}

/// Temporary site root holding `files`, with a config resolved from
/// the test `[site]` section plus `config_extra`.
#[cfg(test)]
pub fn test_site(config_extra: &str, files: &[(&str, &str)]) -> (tempfile::TempDir, SiteConfig) {
    let dir = tempfile::tempdir().unwrap();
    for (rel, content) in files {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    let mut config = crate::config::test_parse_config(config_extra);
    config.root = normalize_path(dir.path());
    (dir, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(config_extra: &str, files: &[(&str, &str)]) -> (tempfile::TempDir, SiteConfig) {
        test_site(config_extra, files)
    }

    #[test]
    fn test_load_docs_ids_and_routes() {
        let (_dir, config) = site(
            "",
            &[
                ("docs/index.md", "# Overview"),
                ("docs/encoders/index.md", "# Encoders"),
                ("docs/server/intro.mdx", "---\nid: overview\n---\n# Server"),
                ("docs/server/notes.txt", "not a doc"),
            ],
        );
        let tree = ContentTree::load(&config).unwrap();
        let ids: Vec<_> = tree.docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["encoders/index", "index", "server/overview"]);

        assert_eq!(tree.doc("encoders/index").unwrap().route, "/docs/encoders");
        assert_eq!(tree.doc("server/overview").unwrap().source, "docs/server/intro.mdx");
        assert!(tree.has_route("/docs/"));
        assert!(tree.has_route("/docs/server/overview"));
        assert!(!tree.has_route("/docs/server/intro"));
    }

    #[test]
    fn test_static_and_pages_routes() {
        let (_dir, config) = site(
            "",
            &[
                ("static/images/logo-colour.svg", "<svg/>"),
                ("src/pages/index.tsx", "export default () => null"),
                ("src/pages/about.md", "# About"),
                ("src/pages/_helper.ts", ""),
                ("src/pages/styles.css", ""),
            ],
        );
        let tree = ContentTree::load(&config).unwrap();
        assert!(tree.has_route("/images/logo-colour.svg"));
        assert!(tree.has_route("/"));
        assert!(tree.has_route("/about"));
        assert!(!tree.has_route("/_helper"));
        assert!(!tree.has_route("/styles"));
    }

    #[test]
    fn test_underscore_dirs_skipped_for_docs_and_pages() {
        let (_dir, config) = site(
            "",
            &[
                ("docs/index.md", ""),
                ("docs/_partials/snippet.md", ""),
                ("docs/guide/_draft.md", ""),
                ("src/pages/_components/Card.tsx", ""),
            ],
        );
        let tree = ContentTree::load(&config).unwrap();
        let ids: Vec<_> = tree.docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["index"]);
        assert!(!tree.has_route("/_components/Card"));
    }

    #[test]
    fn test_static_files_keep_underscore_names() {
        let (_dir, config) = site(
            "",
            &[
                ("static/img/_logo.svg", "<svg/>"),
                ("static/_assets/app.js", ""),
            ],
        );
        let tree = ContentTree::load(&config).unwrap();
        assert!(tree.has_route("/img/_logo.svg"));
        assert!(tree.has_route("/_assets/app.js"));
    }

    #[test]
    fn test_doc_links_and_lines() {
        let (_dir, config) = site(
            "",
            &[("docs/a.md", "---\ntitle: A\n---\n\nSee [b](./b.md).\n")],
        );
        let tree = ContentTree::load(&config).unwrap();
        let doc = tree.doc("a").unwrap();
        assert_eq!(doc.title.as_deref(), Some("A"));
        assert_eq!(doc.links.len(), 1);
        assert_eq!(doc.links[0].dest, "./b.md");
        assert_eq!(doc.links[0].line, 5);
        assert!(tree.doc_by_path(&doc.path).is_some());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let (_dir, config) = site(
            "",
            &[
                ("docs/a.md", "---\nid: same\n---\n"),
                ("docs/b.md", "---\nid: same\n---\n"),
            ],
        );
        let err = ContentTree::load(&config).unwrap_err();
        assert!(err.to_string().contains("duplicate doc id 'same'"));
    }

    #[test]
    fn test_missing_docs_dir() {
        let (_dir, config) = site("", &[]);
        let tree = ContentTree::load(&config).unwrap();
        assert!(tree.docs.is_empty());
    }

    #[test]
    fn test_base_url_prefixes_routes() {
        let (_dir, config) = site(
            "",
            &[("docs/index.md", ""), ("static/img/favicon.ico", "")],
        );
        let config = SiteConfig {
            site: crate::config::SiteInfoConfig {
                base_url: "/pathling/".into(),
                ..config.site.clone()
            },
            ..config
        };
        let tree = ContentTree::load(&config).unwrap();
        assert!(tree.has_route("/pathling/docs"));
        assert!(tree.has_route("/pathling/img/favicon.ico"));
        assert!(!tree.has_route("/docs"));
    }
}
