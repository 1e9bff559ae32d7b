//! Site initialization.
//!
//! - [`structure`]: directories and starter documents
//! - [`config`]: `site.toml` and ignore file generation

mod config;
mod structure;

use anyhow::{Result, bail};
use std::path::Path;

use crate::log;

pub use config::{CONFIG_FILE, generate_config_template};

/// Create a new site at `root`.
///
/// Refuses to touch a directory that already has a `site.toml`. With
/// `dry_run`, only prints the config template to stdout.
pub fn new_site(root: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    let config_path = root.join(CONFIG_FILE);
    if config_path.exists() {
        bail!(
            "'{}' already exists.\n\
             Choose a different directory or remove the existing config.",
            config_path.display()
        );
    }

    structure::create_structure(root)?;
    config::write_config(root)?;
    config::write_ignore_files(root, "build")?;

    log!("init"; "site initialized at {}", root.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{CheckArgs, check::check_site};
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    #[test]
    fn test_new_site_passes_check() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("site");
        new_site(&root, false).unwrap();

        let config = SiteConfig::from_path(&root.join(CONFIG_FILE)).unwrap();
        let tree = check_site(&config, &CheckArgs::default()).unwrap();
        assert_eq!(tree.docs.len(), 2);
        assert!(tree.doc("getting-started").is_some());
    }

    #[test]
    fn test_existing_config_refused() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE), "").unwrap();
        let err = new_site(temp.path(), false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        new_site(temp.path(), true).unwrap();
        assert!(!temp.path().join(CONFIG_FILE).exists());
    }
}
