//! Site link check.
//!
//! Loads the content tree, resolves every navbar, sidebar and document link,
//! then applies the configured broken link policy of each link class.

mod report;
mod resolve;

use std::fmt;

use anyhow::Result;
use owo_colors::OwoColorize;
use thiserror::Error;

use crate::cli::CheckArgs;
use crate::config::{BrokenLinkPolicy, LinksConfig, SiteConfig};
use crate::content::ContentTree;
use crate::core::LinkClass;
use crate::utils::{plural_count, plural_s};
use crate::{debug, log};

pub use report::LinkReport;
pub use resolve::collect_broken_links;

/// Broken links under a `throw` policy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("{}", summarize(.doc, .markdown))]
    Broken { doc: usize, markdown: usize },
}

fn summarize(doc: &usize, markdown: &usize) -> String {
    let mut parts = Vec::new();
    for (&count, class) in [(doc, LinkClass::Doc), (markdown, LinkClass::Markdown)] {
        if count > 0 {
            parts.push(format!("{count} broken {class} link{}", plural_s(count)));
        }
    }
    format!("found {}", parts.join(", "))
}

/// What the policies did with a passing report.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PolicyOutcome {
    /// Links logged as warnings, one per link.
    pub warned: usize,
    /// Links dropped by `ignore`.
    pub ignored: usize,
}

impl fmt::Display for PolicyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.warned == 0 {
            return write!(f, "{}", "all links resolve".green());
        }
        write!(
            f,
            "{} {} {}",
            "found".dimmed(),
            self.warned.to_string().yellow().bold(),
            format!("broken link{}", plural_s(self.warned)).dimmed()
        )
    }
}

/// Load the content tree and check every link against the policies.
///
/// Returns the tree so callers can emit it after a passing check.
pub fn check_site(config: &SiteConfig, args: &CheckArgs) -> Result<ContentTree> {
    let tree = ContentTree::load(config)?;
    log!(
        "check";
        "checking {} and {}",
        plural_count(tree.docs.len(), "document"),
        plural_count(tree.sidebars.sidebars.len(), "sidebar")
    );

    let report = collect_broken_links(config, &tree);

    let mut policies = config.links.clone();
    if args.warn_only {
        policies.downgrade_to_warn();
    }
    let outcome = apply_policies(&report, &policies)?;

    log!("check"; "{}", outcome);
    if outcome.ignored > 0 {
        debug!("check"; "ignored {}", plural_count(outcome.ignored, "broken link"));
    }
    Ok(tree)
}

/// Apply each class's policy to the report.
///
/// `warn` logs one warning per link, `ignore` drops the class, and any
/// `throw` class with broken links prints its section and fails.
pub fn apply_policies(
    report: &LinkReport,
    policies: &LinksConfig,
) -> Result<PolicyOutcome, LinkError> {
    let mut outcome = PolicyOutcome::default();
    let mut thrown = Vec::new();

    for class in [LinkClass::Doc, LinkClass::Markdown] {
        let count = report.error_count(class);
        if count == 0 {
            continue;
        }
        match policies.policy(class) {
            BrokenLinkPolicy::Ignore => outcome.ignored += count,
            BrokenLinkPolicy::Warn => {
                for (source, link) in report.iter(class) {
                    log!("warning"; "broken {class} link in {source}: {link}");
                    outcome.warned += 1;
                }
            }
            BrokenLinkPolicy::Throw => thrown.push(class),
        }
    }

    if thrown.is_empty() {
        return Ok(outcome);
    }

    for &class in &thrown {
        report.print_class(class);
    }
    eprintln!();

    let count = |class| {
        if thrown.contains(&class) {
            report.error_count(class)
        } else {
            0
        }
    };
    Err(LinkError::Broken {
        doc: count(LinkClass::Doc),
        markdown: count(LinkClass::Markdown),
    })
}
