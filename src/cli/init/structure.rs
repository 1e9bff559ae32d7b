//! Starter content for a new site.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Directories every new site gets.
const SITE_DIRS: &[&str] = &["docs", "static/img", "src/pages"];

/// Starter files, relative to the site root.
const SITE_FILES: &[(&str, &str)] = &[
    (
        "docs/index.md",
        "---\ntitle: Introduction\n---\n\n# Introduction\n\nStart writing in `docs/`. \
         See [getting started](./getting-started.md).\n",
    ),
    (
        "docs/getting-started.md",
        "# Getting started\n\nBack to the [introduction](./index.md).\n",
    ),
    (
        "sidebars.toml",
        "[sidebars]\ndocs = [\"index\", \"getting-started\"]\n",
    ),
];

/// Create directories and starter files under `root`.
///
/// Existing files are left alone.
pub fn create_structure(root: &Path) -> Result<()> {
    for dir in SITE_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("failed to create directory '{}'", path.display()))?;
    }

    for (rel, content) in SITE_FILES {
        let path = root.join(rel);
        if path.exists() {
            continue;
        }
        fs::write(&path, content)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_structure() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("my_site");

        create_structure(&root).unwrap();

        assert!(root.join("docs/index.md").is_file());
        assert!(root.join("sidebars.toml").is_file());
        assert!(root.join("static/img").is_dir());
    }

    #[test]
    fn test_existing_files_kept() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("docs")).unwrap();
        fs::write(temp.path().join("docs/index.md"), "mine").unwrap();

        create_structure(temp.path()).unwrap();
        assert_eq!(fs::read_to_string(temp.path().join("docs/index.md")).unwrap(), "mine");
    }
}
