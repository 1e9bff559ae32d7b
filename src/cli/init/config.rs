//! Configuration file generation.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Default config filename
pub const CONFIG_FILE: &str = "site.toml";

/// Starter `site.toml`: every section with its default values.
const CONFIG_TEMPLATE: &str = r#"[site]
title = "My Site"
tagline = "Documentation for my project"
url = "https://example.com"
base_url = "/"
# favicon = "img/favicon.ico"
# organization = "my-org"
# project = "my-project"
# trailing_slash = false

[i18n]
default_locale = "en"
locales = ["en"]

[links]
# throw | warn | ignore
on_broken_links = "throw"
on_broken_markdown_links = "warn"

[docs]
path = "docs"
route_base_path = "docs"
sidebar = "sidebars.toml"
# edit_url = "https://github.com/my-org/my-project/tree/main/"

[theme]
# custom_css = "src/css/custom.css"
static_dirs = ["static"]
pages = "src/pages"

[navbar]
title = "My Site"

[[navbar.items]]
type = "doc_sidebar"
sidebar_id = "docs"
label = "Docs"

[[navbar.items]]
type = "link"
href = "https://github.com"
label = "GitHub"
position = "right"

[footer]
copyright = ""

[prism]
theme = "github"
dark_theme = "dracula"
additional_languages = []
"#;

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore"];

/// Generate site.toml content with a version header
pub fn generate_config_template() -> String {
    format!(
        "# docsite configuration file (v{})\n\n{CONFIG_TEMPLATE}",
        env!("CARGO_PKG_VERSION")
    )
}

/// Write default site.toml configuration
pub fn write_config(root: &Path) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    fs::write(&path, generate_config_template())
        .with_context(|| format!("failed to write config file '{}'", path.display()))
}

/// Write a .gitignore excluding the output directory, unless one exists
pub fn write_ignore_files(root: &Path, output_dir: &str) -> Result<()> {
    let content = format!("/{output_dir}/\n.DS_Store\n");
    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("failed to write '{}'", path.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_resolves() {
        let config = SiteConfig::resolve(&generate_config_template()).unwrap();
        assert_eq!(config.i18n.default_locale, "en");
        assert_eq!(config.navbar.items.len(), 2);
    }

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path()).unwrap();

        let content = fs::read_to_string(temp.path().join(CONFIG_FILE)).unwrap();
        assert!(content.starts_with("# docsite configuration file"));
        assert!(content.contains("[links]"));
    }

    #[test]
    fn test_ignore_file_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let gitignore = temp.path().join(".gitignore");
        fs::write(&gitignore, "custom content").unwrap();

        write_ignore_files(temp.path(), "build").unwrap();
        assert_eq!(fs::read_to_string(&gitignore).unwrap(), "custom content");
    }
}
