//! `[docs]` section: where documents live and where they are served.
//!
//! ```toml
//! [docs]
//! path = "docs"
//! route_base_path = "docs"
//! sidebar = "sidebars.toml"
//! edit_url = "https://github.com/aehrc/pathling/tree/main/site/"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{validate_http_url, validate_relative_path};
use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Documents directory, relative to the site root.
    pub path: PathBuf,

    /// URL segment docs are served under; empty serves them at the base URL.
    pub route_base_path: String,

    /// Sidebar structure file, relative to the site root.
    pub sidebar: PathBuf,

    /// Base URL for "edit this page" links.
    pub edit_url: Option<String>,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            path: "docs".into(),
            route_base_path: "docs".into(),
            sidebar: "sidebars.toml".into(),
            edit_url: None,
        }
    }
}

impl DocsConfig {
    const PATH: FieldPath = FieldPath::new("docs.path");
    const ROUTE_BASE_PATH: FieldPath = FieldPath::new("docs.route_base_path");
    const SIDEBAR: FieldPath = FieldPath::new("docs.sidebar");
    const EDIT_URL: FieldPath = FieldPath::new("docs.edit_url");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_relative_path(&self.path, Self::PATH, diag);
        validate_relative_path(&self.sidebar, Self::SIDEBAR, diag);

        if self.route_base_path.contains(['?', '#', '\\']) || self.route_base_path.contains("//") {
            diag.error_with_hint(
                Self::ROUTE_BASE_PATH,
                format!("'{}' is not a valid route segment", self.route_base_path),
                "use plain path segments such as \"docs\"",
            );
        }

        if let Some(edit_url) = &self.edit_url {
            validate_http_url(edit_url, Self::EDIT_URL, diag);
        }
    }

    /// Route prefix of every document: `base_url` + `route_base_path`, no trailing `/`.
    ///
    /// `("/", "docs")` -> `"/docs"`, `("/pathling/", "")` -> `"/pathling"`
    pub fn route_prefix(&self, base_url: &str) -> String {
        crate::utils::path::clean_route(&format!("{base_url}/{}", self.route_base_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let mut diag = ConfigDiagnostics::new();
        DocsConfig::default().validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_invalid_fields() {
        let docs = DocsConfig {
            path: "/abs/docs".into(),
            route_base_path: "docs?x".into(),
            sidebar: "../sidebars.toml".into(),
            edit_url: Some("github.com/aehrc".into()),
        };
        let mut diag = ConfigDiagnostics::new();
        docs.validate(&mut diag);
        for field in ["docs.path", "docs.route_base_path", "docs.sidebar", "docs.edit_url"] {
            assert!(diag.has_error_for(field), "{field}");
        }
    }

    #[test]
    fn test_route_prefix() {
        let docs = DocsConfig::default();
        assert_eq!(docs.route_prefix("/"), "/docs");
        assert_eq!(docs.route_prefix("/pathling/"), "/pathling/docs");

        let docs = DocsConfig {
            route_base_path: String::new(),
            ..DocsConfig::default()
        };
        assert_eq!(docs.route_prefix("/"), "/");
        assert_eq!(docs.route_prefix("/pathling/"), "/pathling");
    }
}
