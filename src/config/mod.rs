//! Site configuration management for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # One module per TOML section
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # Config file discovery
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! Resolution is single-shot: parse, collect every validation failure, and
//! either return a complete [`SiteConfig`] or a [`ConfigError`] naming each
//! offending field. A returned config is never modified afterwards.

pub mod section;
pub mod types;
mod util;

pub use section::{
    BrokenLinkPolicy, DocsConfig, FooterConfig, I18nConfig, LinksConfig, NavItem, NavbarConfig,
    PrismConfig, SiteInfoConfig, ThemeConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::debug;
use util::find_config_file;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site identity
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Locales
    #[serde(default)]
    pub i18n: I18nConfig,

    /// Broken link policies
    #[serde(default)]
    pub links: LinksConfig,

    /// Documents and sidebar file
    #[serde(default)]
    pub docs: DocsConfig,

    /// Stylesheet, static and page directories
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Navigation bar
    #[serde(default)]
    pub navbar: NavbarConfig,

    /// Footer
    #[serde(default)]
    pub footer: FooterConfig,

    /// Syntax highlighting
    #[serde(default)]
    pub prism: PrismConfig,
}

impl SiteConfig {
    /// Locate, read and resolve the configuration.
    ///
    /// Searches upward from cwd for `config_name` unless it is absolute. The
    /// project root is the config file's parent directory.
    pub fn load(config_name: &Path) -> Result<Self> {
        let config_path = find_config_file(config_name)
            .ok_or_else(|| ConfigError::NotFound(config_name.to_path_buf()))?;
        Ok(Self::from_path(&config_path)?)
    }

    /// Read and resolve a config file at a known location.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let mut config = Self::resolve(&content)?;
        let config_path = crate::utils::path::normalize_path(path);
        config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.config_path = config_path;

        debug!("config"; "resolved {}", config.config_path.display());
        Ok(config)
    }

    /// Parse and validate configuration source.
    ///
    /// Unknown keys and every invariant violation are reported together.
    pub fn resolve(content: &str) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content)?;

        let mut diag = ConfigDiagnostics::new();
        for field in ignored {
            diag.error_with_hint(
                FieldPath::owned(field),
                "unknown field",
                "remove it or fix its spelling",
            );
        }
        config.validate_into(&mut diag);

        diag.into_result().map_err(ConfigError::Diagnostics)?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Validate every section.
    fn validate_into(&self, diag: &mut ConfigDiagnostics) {
        self.site.validate(diag);
        self.i18n.validate(diag);
        self.docs.validate(diag);
        self.theme.validate(diag);
        self.navbar.validate(diag);
        self.prism.validate(diag);
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Route prefix under which documents are served.
    pub fn docs_route_prefix(&self) -> String {
        self.docs.route_prefix(&self.site.base_url)
    }

    /// Canonical JSON form consumed by the build tool.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Minimal valid `[site]` section; tests append the sections they exercise.
#[cfg(test)]
pub const TEST_SITE: &str = r#"[site]
title = "Pathling"
tagline = "Advanced FHIR&reg; analytics server"
url = "https://pathling.csiro.au"
base_url = "/"
"#;

/// Resolve [`TEST_SITE`] plus `extra`, panicking on any error.
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    match SiteConfig::resolve(&format!("{TEST_SITE}{extra}")) {
        Ok(config) => config,
        Err(e) => panic!("test config rejected: {e}"),
    }
}

// ============================================================================
// tests
// ============================================================================
