//! Build command: check links, then emit `site.json` for the build tool.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use super::CheckArgs;
use super::check::check_site;
use crate::config::SiteConfig;
use crate::content::{ContentTree, Doc, SidebarEntry};
use crate::log;
use crate::utils::plural_count;

/// Default output directory, relative to the site root.
const DEFAULT_OUTPUT: &str = "build";

/// Emitted file name.
pub const MANIFEST_FILE: &str = "site.json";

/// Everything the external build tool consumes.
#[derive(Debug, Serialize)]
pub struct Manifest<'a> {
    pub config: &'a SiteConfig,
    pub docs: &'a [Doc],
    pub sidebars: &'a BTreeMap<String, Vec<SidebarEntry>>,
}

impl<'a> Manifest<'a> {
    pub fn new(config: &'a SiteConfig, tree: &'a ContentTree) -> Self {
        Self {
            config,
            docs: &tree.docs,
            sidebars: &tree.sidebars.sidebars,
        }
    }
}

/// Check the site and write the manifest.
///
/// Nothing is written when the check fails. Returns the manifest path.
pub fn build_site(config: &SiteConfig, args: &CheckArgs, output: Option<&Path>) -> Result<PathBuf> {
    let tree = check_site(config, args)?;

    let output_dir = config.root_join(output.unwrap_or(Path::new(DEFAULT_OUTPUT)));
    fs::create_dir_all(&output_dir).with_context(|| {
        format!("failed to create output directory '{}'", output_dir.display())
    })?;

    let json = serde_json::to_string_pretty(&Manifest::new(config, &tree))?;
    let path = output_dir.join(MANIFEST_FILE);
    fs::write(&path, json).with_context(|| format!("failed to write '{}'", path.display()))?;

    log!(
        "build";
        "wrote {} with {}",
        config.root_relative(&path).display(),
        plural_count(tree.docs.len(), "document")
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::test_site;

    const NAVBAR: &str = "[[navbar.items]]\ntype = \"doc\"\ndoc_id = \"index\"\nlabel = \"Overview\"\n";

    #[test]
    fn test_build_writes_manifest() {
        let (_dir, config) = test_site(
            NAVBAR,
            &[
                ("docs/index.md", "---\ntitle: Overview\n---\n# Overview\n"),
                ("docs/server/index.md", "[home](../index.md)\n"),
                ("sidebars.toml", "[sidebars]\nserver = [\"server/index\"]\n"),
            ],
        );
        let path = build_site(&config, &CheckArgs::default(), None).unwrap();
        assert_eq!(path, config.root.join("build/site.json"));

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["config"]["site"]["title"], "Pathling");
        assert_eq!(json["docs"][0]["id"], "index");
        assert_eq!(json["docs"][0]["route"], "/docs");
        assert_eq!(json["docs"][0]["title"], "Overview");
        assert_eq!(json["docs"][1]["source"], "docs/server/index.md");
        assert_eq!(json["sidebars"]["server"][0], "server/index");
    }

    #[test]
    fn test_broken_doc_link_produces_no_output() {
        let (_dir, config) = test_site(NAVBAR, &[]);
        assert!(build_site(&config, &CheckArgs::default(), None).is_err());
        assert!(!config.root.join("build").exists());
    }

    #[test]
    fn test_warn_only_build_completes() {
        let (_dir, config) = test_site(NAVBAR, &[("docs/a.md", "[x](./x.md)\n")]);
        let args = CheckArgs {
            warn_only: true,
            ..CheckArgs::default()
        };
        let path = build_site(&config, &args, Some(Path::new("out"))).unwrap();
        assert!(path.ends_with("out/site.json"));
        assert!(path.is_file());
    }
}
