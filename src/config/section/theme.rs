//! `[theme]` section: stylesheet and served directories.
//!
//! ```toml
//! [theme]
//! custom_css = "src/css/custom.css"
//! static_dirs = ["static"]
//! pages = "src/pages"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::validate_relative_path;
use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Extra stylesheet handed to the build tool.
    pub custom_css: Option<PathBuf>,

    /// Directories copied to the site root as-is.
    pub static_dirs: Vec<PathBuf>,

    /// Stand-alone pages directory.
    pub pages: PathBuf,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            custom_css: None,
            static_dirs: vec!["static".into()],
            pages: "src/pages".into(),
        }
    }
}

impl ThemeConfig {
    const CUSTOM_CSS: FieldPath = FieldPath::new("theme.custom_css");
    const STATIC_DIRS: FieldPath = FieldPath::new("theme.static_dirs");
    const PAGES: FieldPath = FieldPath::new("theme.pages");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(css) = &self.custom_css {
            validate_relative_path(css, Self::CUSTOM_CSS, diag);
        }
        for (i, dir) in self.static_dirs.iter().enumerate() {
            validate_relative_path(dir, Self::STATIC_DIRS.index(i), diag);
        }
        validate_relative_path(&self.pages, Self::PAGES, diag);
    }
}
