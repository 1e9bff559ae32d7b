//! Sidebar structure file.
//!
//! ```toml
//! [sidebars]
//! fhirpath = [
//!     "fhirpath/index",
//!     { type = "category", label = "Functions", items = ["fhirpath/functions"] },
//!     { type = "link", label = "HL7", href = "https://hl7.org/fhirpath/" },
//! ]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::debug;

/// Named, ordered navigation trees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sidebars {
    pub sidebars: BTreeMap<String, Vec<SidebarEntry>>,
}

/// A sidebar entry: a bare doc id or a typed node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarEntry {
    Doc(String),
    Node(SidebarNode),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SidebarNode {
    /// Doc with a custom label.
    Doc { id: String, label: Option<String> },
    /// Collapsible group, optionally linking to an overview doc.
    Category {
        label: String,
        #[serde(default)]
        link: Option<String>,
        #[serde(default)]
        items: Vec<SidebarEntry>,
    },
    /// Plain link.
    Link { label: String, href: String },
}

/// Something a sidebar points at, with its position for reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarRef<'a> {
    Doc(&'a str),
    Href(&'a str),
}

impl Sidebars {
    /// Read the sidebar file; a missing file means no sidebars.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("content"; "no sidebar file at {}", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read sidebar file '{}'", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("invalid sidebar file '{}'", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn get(&self, id: &str) -> Option<&[SidebarEntry]> {
        self.sidebars.get(id).map(Vec::as_slice)
    }

    /// First doc a sidebar leads to, depth first (what a navbar sidebar item opens).
    pub fn first_doc(&self, id: &str) -> Option<&str> {
        fn walk(entries: &[SidebarEntry]) -> Option<&str> {
            entries.iter().find_map(|entry| match entry {
                SidebarEntry::Doc(id) | SidebarEntry::Node(SidebarNode::Doc { id, .. }) => {
                    Some(id.as_str())
                }
                SidebarEntry::Node(SidebarNode::Category { link, items, .. }) => {
                    link.as_deref().or_else(|| walk(items))
                }
                SidebarEntry::Node(SidebarNode::Link { .. }) => None,
            })
        }
        self.get(id).and_then(walk)
    }

    /// Every doc id and href referenced, as `(sidebar id, reference)`, in file order.
    pub fn references(&self) -> Vec<(&str, SidebarRef<'_>)> {
        fn walk<'a>(sidebar: &'a str, entries: &'a [SidebarEntry], out: &mut Vec<(&'a str, SidebarRef<'a>)>) {
            for entry in entries {
                match entry {
                    SidebarEntry::Doc(id) | SidebarEntry::Node(SidebarNode::Doc { id, .. }) => {
                        out.push((sidebar, SidebarRef::Doc(id)));
                    }
                    SidebarEntry::Node(SidebarNode::Category { link, items, .. }) => {
                        if let Some(link) = link {
                            out.push((sidebar, SidebarRef::Doc(link)));
                        }
                        walk(sidebar, items, out);
                    }
                    SidebarEntry::Node(SidebarNode::Link { href, .. }) => {
                        out.push((sidebar, SidebarRef::Href(href)));
                    }
                }
            }
        }

        let mut out = Vec::new();
        for (id, entries) in &self.sidebars {
            walk(id, entries, &mut out);
        }
        out
    }
}
