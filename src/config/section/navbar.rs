//! `[navbar]` section: title, logo and ordered items.
//!
//! Items are a closed set selected by `type`; an unknown type or an unknown
//! key inside an item is a parse error rather than a silently dropped entry.
//!
//! ```toml
//! [navbar]
//! logo = { alt = "Pathling", src = "images/logo-colour.svg", src_dark = "images/logo-colour-dark.svg" }
//!
//! [[navbar.items]]
//! type = "doc"
//! doc_id = "index"
//! label = "Overview"
//!
//! [[navbar.items]]
//! type = "doc_sidebar"
//! sidebar_id = "fhirpath"
//! label = "FHIRPath"
//!
//! [[navbar.items]]
//! type = "link"
//! href = "https://github.com/aehrc/pathling"
//! label = "GitHub"
//! position = "right"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::is_external_link;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Text next to the logo; unset shows the logo only.
    pub title: Option<String>,

    pub logo: Option<LogoConfig>,

    /// Items in display order.
    pub items: Vec<NavItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogoConfig {
    #[serde(default)]
    pub alt: String,
    pub src: String,
    /// Variant shown in dark mode.
    #[serde(default)]
    pub src_dark: Option<String>,
}

/// One navbar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavItem {
    /// Link to a single document by id.
    Doc(DocItem),
    /// Link to the first document of a sidebar.
    DocSidebar(SidebarItem),
    /// Plain link, external or site-root.
    Link(LinkItem),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocItem {
    pub doc_id: String,
    pub label: String,
    #[serde(default)]
    pub position: NavPosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarItem {
    pub sidebar_id: String,
    pub label: String,
    #[serde(default)]
    pub position: NavPosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkItem {
    pub href: String,
    pub label: String,
    #[serde(default)]
    pub position: NavPosition,
}

/// Side of the navbar an item is rendered on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPosition {
    #[default]
    Left,
    Right,
}

impl NavItem {
    pub fn label(&self) -> &str {
        match self {
            Self::Doc(item) => &item.label,
            Self::DocSidebar(item) => &item.label,
            Self::Link(item) => &item.label,
        }
    }

    #[cfg(test)]
    pub fn position(&self) -> NavPosition {
        match self {
            Self::Doc(item) => item.position,
            Self::DocSidebar(item) => item.position,
            Self::Link(item) => item.position,
        }
    }
}

impl NavbarConfig {
    const ITEMS: FieldPath = FieldPath::new("navbar.items");
    const LOGO: FieldPath = FieldPath::new("navbar.logo");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(logo) = &self.logo {
            diag.require_non_empty(Self::LOGO.join("src"), &logo.src);
        }

        for (i, item) in self.items.iter().enumerate() {
            let field = Self::ITEMS.index(i);
            diag.require_non_empty(field.join("label"), item.label());

            match item {
                NavItem::Doc(doc) => {
                    let id = doc.doc_id.trim();
                    if id.is_empty() || id.starts_with('/') || id.ends_with('/') {
                        diag.error_with_hint(
                            field.join("doc_id"),
                            format!("'{}' is not a document id", doc.doc_id),
                            "use the path below the docs directory without extension, e.g. \"encoders/index\"",
                        );
                    }
                }
                NavItem::DocSidebar(sidebar) => {
                    diag.require_non_empty(field.join("sidebar_id"), &sidebar.sidebar_id);
                }
                NavItem::Link(link) => {
                    let href = field.join("href");
                    if is_external_link(&link.href) {
                        // Any scheme goes: mailto: and tel: are common contact links
                        if let Err(e) = url::Url::parse(&link.href) {
                            diag.error(href, format!("invalid URL '{}': {e}", link.href));
                        }
                    } else if !link.href.starts_with('/') {
                        diag.error_with_hint(
                            href,
                            format!("'{}' is neither an absolute URL nor a site path", link.href),
                            "use https://... or a path starting with '/'",
                        );
                    }
                }
            }
        }
    }
}
