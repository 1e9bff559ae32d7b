//! Documents: id, route and front matter.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::scan::ScannedLink;
use crate::utils::path::{clean_route, to_slash};

/// A document under the docs directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Doc {
    /// Path below the docs directory without extension, or its front matter override.
    pub id: String,
    /// Route the build tool serves the document at.
    pub route: String,
    /// Source file relative to the site root, `/`-separated.
    pub source: String,
    /// Front matter `title`, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Absolute source path.
    #[serde(skip)]
    pub path: PathBuf,
    /// Links found in the body.
    #[serde(skip)]
    pub links: Vec<ScannedLink>,
}

impl Doc {
    /// Derive id and route for a document file.
    ///
    /// `rel` is the path below the docs directory, `route_prefix` the
    /// docs route prefix (`/docs`).
    pub fn new(rel: &Path, route_prefix: &str, front: &FrontMatter) -> Self {
        let dir = rel.parent().map(to_slash).unwrap_or_default();
        let stem = rel
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = front.id.clone().unwrap_or(stem);
        let id = if dir.is_empty() {
            name
        } else {
            format!("{dir}/{name}")
        };

        let route = match front.slug.as_deref() {
            Some(slug) if slug.starts_with('/') => clean_route(&format!("{route_prefix}{slug}")),
            Some(slug) => clean_route(&format!("{route_prefix}/{dir}/{slug}")),
            None => clean_route(&format!("{route_prefix}/{}", strip_index(&id))),
        };

        Self {
            id,
            route,
            source: String::new(),
            title: front.title.clone(),
            path: PathBuf::new(),
            links: Vec::new(),
        }
    }
}

/// Drop a trailing `index` segment: `encoders/index` -> `encoders`, `index` -> ``.
pub fn strip_index(id: &str) -> &str {
    if id == "index" {
        ""
    } else {
        id.strip_suffix("/index").unwrap_or(id)
    }
}

/// Front matter keys that affect ids and routes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub id: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
}

impl FrontMatter {
    /// Split `---` front matter from a document.
    ///
    /// Returns the parsed keys and the body. Without front matter the whole
    /// source is the body.
    pub fn extract(source: &str) -> (Self, &str) {
        let trimmed = source.trim_start();
        let Some((open, inner)) = trimmed.split_once('\n') else {
            return (Self::default(), source);
        };
        if open.trim_end() != "---" {
            return (Self::default(), source);
        }

        // Closing fence is a line holding exactly `---`
        let mut offset = 0;
        for line in inner.split_inclusive('\n') {
            if line.trim_end() == "---" {
                let front = Self::parse(&inner[..offset]);
                return (front, &inner[offset + line.len()..]);
            }
            offset += line.len();
        }
        (Self::default(), source)
    }

    /// Parse simple YAML-like `key: value` lines.
    fn parse(content: &str) -> Self {
        let mut front = Self::default();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = unquote(value.trim());
            if value.is_empty() {
                continue;
            }
            match key.trim() {
                "id" => front.id = Some(value.to_string()),
                "slug" => front.slug = Some(value.to_string()),
                "title" => front.title = Some(value.to_string()),
                _ => {}
            }
        }
        front
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
