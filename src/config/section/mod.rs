//! Configuration section definitions.
//!
//! Each module corresponds to a section in `site.toml`:
//!
//! | Module    | TOML Section | Purpose                                     |
//! |-----------|--------------|---------------------------------------------|
//! | `site`    | `[site]`     | Title, tagline, url, base url, repository   |
//! | `i18n`    | `[i18n]`     | Locales                                     |
//! | `links`   | `[links]`    | Broken link policies                        |
//! | `docs`    | `[docs]`     | Docs directory, route, sidebar file         |
//! | `theme`   | `[theme]`    | Custom stylesheet, static and page dirs     |
//! | `navbar`  | `[navbar]`   | Navigation bar items and logo               |
//! | `footer`  | `[footer]`   | Footer copyright markup                     |
//! | `prism`   | `[prism]`    | Syntax highlighting presets                 |

mod docs;
mod footer;
mod i18n;
mod links;
mod navbar;
mod prism;
mod site;
mod theme;

pub use docs::DocsConfig;
pub use footer::FooterConfig;
pub use i18n::I18nConfig;
pub use links::{BrokenLinkPolicy, LinksConfig};
pub use navbar::{NavItem, NavbarConfig};
pub use prism::PrismConfig;
pub use site::SiteInfoConfig;
pub use theme::ThemeConfig;

use std::path::{Component, Path};

use super::{ConfigDiagnostics, FieldPath};

/// Check a configured resource reference for unsafe components (`..` or absolute).
///
/// References are resolved relative to the site root by later stages, so
/// they must stay inside it.
pub(crate) fn validate_relative_path(path: &Path, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if path.as_os_str().is_empty() {
        diag.error(field, "path must not be empty");
        return;
    }
    for comp in path.components() {
        let reason = match comp {
            Component::ParentDir => "parent directory '..' not allowed",
            Component::Prefix(_) | Component::RootDir => "absolute paths not allowed",
            _ => continue,
        };
        diag.error_with_hint(
            field,
            format!("path '{}': {reason}", path.display()),
            "use a path relative to the directory containing site.toml",
        );
        return;
    }
}

/// Check that a string is an absolute `http`/`https` URL with a host.
pub(crate) fn validate_http_url(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) -> Option<url::Url> {
    match url::Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!("scheme '{}' not supported, must be http or https", parsed.scheme()),
                    "use format like https://example.com",
                );
                return None;
            }
            if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
                return None;
            }
            Some(parsed)
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL '{value}': {e}"),
                "use format like https://example.com",
            );
            None
        }
    }
}
