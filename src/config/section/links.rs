//! `[links]` section: what to do when a link does not resolve.
//!
//! ```toml
//! [links]
//! on_broken_links = "throw"           # navbar, sidebar and route links
//! on_broken_markdown_links = "warn"   # ./other.md style links
//! ```

use serde::{Deserialize, Serialize};

use crate::core::LinkClass;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Policy for doc links.
    pub on_broken_links: BrokenLinkPolicy,

    /// Policy for Markdown file links.
    pub on_broken_markdown_links: BrokenLinkPolicy,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            on_broken_links: BrokenLinkPolicy::Throw,
            on_broken_markdown_links: BrokenLinkPolicy::Warn,
        }
    }
}

impl LinksConfig {
    /// Policy governing a link class.
    pub fn policy(&self, class: LinkClass) -> BrokenLinkPolicy {
        match class {
            LinkClass::Doc => self.on_broken_links,
            LinkClass::Markdown => self.on_broken_markdown_links,
        }
    }

    /// Downgrade every `throw` to `warn` (`--warn-only`).
    pub fn downgrade_to_warn(&mut self) {
        for policy in [&mut self.on_broken_links, &mut self.on_broken_markdown_links] {
            if *policy == BrokenLinkPolicy::Throw {
                *policy = BrokenLinkPolicy::Warn;
            }
        }
    }
}

/// Broken link policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinkPolicy {
    /// Abort the build.
    #[default]
    Throw,
    /// Log one warning per broken link and continue.
    Warn,
    /// Skip silently.
    Ignore,
}
