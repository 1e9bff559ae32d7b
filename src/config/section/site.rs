//! `[site]` section: site identity.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Pathling"
//! tagline = "Advanced FHIR&reg; analytics server"
//! url = "https://pathling.csiro.au"
//! base_url = "/"
//! favicon = "img/favicon.ico"
//! organization = "aehrc"
//! project = "pathling"
//! trailing_slash = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{validate_http_url, validate_relative_path};
use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// One-line description shown under the title.
    pub tagline: String,

    /// Production origin, e.g. `https://pathling.csiro.au`.
    pub url: String,

    /// Path the site is served under, `/` or `/project/`.
    pub base_url: String,

    /// Favicon, relative to the static directories.
    pub favicon: Option<PathBuf>,

    /// Source-control organization (GitHub user or org).
    pub organization: Option<String>,

    /// Source-control project (repository name).
    pub project: Option<String>,

    /// Emit routes with (`true`) or without (`false`) a trailing slash; unset
    /// leaves the choice to the build tool.
    pub trailing_slash: Option<bool>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: String::new(),
            url: String::new(),
            base_url: "/".into(),
            favicon: None,
            organization: None,
            project: None,
            trailing_slash: None,
        }
    }
}

impl SiteInfoConfig {
    const TITLE: FieldPath = FieldPath::new("site.title");
    const TAGLINE: FieldPath = FieldPath::new("site.tagline");
    const URL: FieldPath = FieldPath::new("site.url");
    const BASE_URL: FieldPath = FieldPath::new("site.base_url");
    const FAVICON: FieldPath = FieldPath::new("site.favicon");
    const ORGANIZATION: FieldPath = FieldPath::new("site.organization");
    const PROJECT: FieldPath = FieldPath::new("site.project");

    /// Validate site identity.
    ///
    /// # Checks
    /// - `title` and `tagline` are non-empty
    /// - `url` is an absolute http(s) origin without a path
    /// - `base_url` starts and ends with `/`
    /// - `organization` and `project` are non-empty and given together
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        diag.require_non_empty(Self::TITLE, &self.title);
        diag.require_non_empty(Self::TAGLINE, &self.tagline);

        self.validate_url(diag);
        self.validate_base_url(diag);

        if let Some(favicon) = &self.favicon {
            validate_relative_path(favicon, Self::FAVICON, diag);
        }

        for (field, value) in [
            (Self::ORGANIZATION, &self.organization),
            (Self::PROJECT, &self.project),
        ] {
            if let Some(value) = value {
                diag.require_non_empty(field, value);
            }
        }
        match (&self.organization, &self.project) {
            (Some(_), None) => diag.error(
                Self::PROJECT,
                format!("{} is set but {} is not", Self::ORGANIZATION, Self::PROJECT),
            ),
            (None, Some(_)) => diag.error(
                Self::ORGANIZATION,
                format!("{} is set but {} is not", Self::PROJECT, Self::ORGANIZATION),
            ),
            _ => {}
        }
    }

    fn validate_url(&self, diag: &mut ConfigDiagnostics) {
        if self.url.trim().is_empty() {
            diag.error_with_hint(
                Self::URL,
                "must be set",
                format!("set {}, e.g.: \"https://example.com\"", Self::URL),
            );
            return;
        }

        let Some(parsed) = validate_http_url(&self.url, Self::URL, diag) else {
            return;
        };

        if parsed.path() != "/" {
            diag.error_with_hint(
                Self::URL,
                format!("URL must not contain a path, found '{}'", parsed.path()),
                format!("move the path into {}", Self::BASE_URL),
            );
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            diag.error(Self::URL, "URL must not contain a query or fragment");
        }
    }

    fn validate_base_url(&self, diag: &mut ConfigDiagnostics) {
        let base = self.base_url.as_str();
        let well_formed = base.starts_with('/')
            && base.ends_with('/')
            && !base.contains("//")
            && !base.contains(['?', '#']);
        if !well_formed {
            diag.error_with_hint(
                Self::BASE_URL,
                format!("'{base}' is not a valid base path"),
                "start and end with '/', e.g. \"/\" or \"/pathling/\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> SiteInfoConfig {
        SiteInfoConfig {
            title: "Pathling".into(),
            tagline: "Advanced FHIR&reg; analytics server".into(),
            url: "https://pathling.csiro.au".into(),
            ..SiteInfoConfig::default()
        }
    }

    fn errors(info: &SiteInfoConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        info.validate(&mut diag);
        diag
    }

    #[test]
    fn test_valid_site() {
        assert!(errors(&valid()).is_empty());
    }

    #[test]
    fn test_empty_title_and_tagline() {
        let info = SiteInfoConfig {
            title: String::new(),
            tagline: " ".into(),
            ..valid()
        };
        let diag = errors(&info);
        assert!(diag.has_error_for("site.title"));
        assert!(diag.has_error_for("site.tagline"));
    }

    #[test]
    fn test_url_rules() {
        for bad in ["", "pathling.csiro.au", "ftp://pathling.csiro.au", "https://x.org/docs"] {
            let info = SiteInfoConfig {
                url: bad.into(),
                ..valid()
            };
            assert!(errors(&info).has_error_for("site.url"), "{bad} accepted");
        }
        let info = SiteInfoConfig {
            url: "https://pathling.csiro.au/".into(),
            ..valid()
        };
        assert!(errors(&info).is_empty());
    }

    #[test]
    fn test_base_url_rules() {
        for bad in ["", "docs/", "/docs", "/a//b/", "/a/?x=1/"] {
            let info = SiteInfoConfig {
                base_url: bad.into(),
                ..valid()
            };
            assert!(errors(&info).has_error_for("site.base_url"), "{bad} accepted");
        }
        for good in ["/", "/pathling/", "/a/b/"] {
            let info = SiteInfoConfig {
                base_url: good.into(),
                ..valid()
            };
            assert!(errors(&info).is_empty(), "{good} rejected");
        }
    }

    #[test]
    fn test_repository_given_together() {
        let info = SiteInfoConfig {
            organization: Some("aehrc".into()),
            ..valid()
        };
        assert!(errors(&info).has_error_for("site.project"));

        let info = SiteInfoConfig {
            organization: Some("aehrc".into()),
            project: Some("pathling".into()),
            ..valid()
        };
        assert!(errors(&info).is_empty());
    }
}
