//! `[i18n]` section: locales.
//!
//! ```toml
//! [i18n]
//! default_locale = "en"
//! locales = ["en", "zh-Hans"]
//! ```

use regex::Regex;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Language subtag followed by script/region/variant subtags (`en`, `zh-Hans`, `pt-BR`).
static LOCALE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Locale the site is built in when none is requested.
    pub default_locale: String,

    /// Every locale the site is translated into, in display order.
    pub locales: Vec<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".into(),
            locales: vec!["en".into()],
        }
    }
}

impl I18nConfig {
    const DEFAULT_LOCALE: FieldPath = FieldPath::new("i18n.default_locale");
    const LOCALES: FieldPath = FieldPath::new("i18n.locales");

    /// Check whether a string is a well-formed locale code.
    pub fn is_locale_code(code: &str) -> bool {
        LOCALE_CODE.is_match(code)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.locales.is_empty() {
            diag.error_with_hint(
                Self::LOCALES,
                "at least one locale is required",
                format!("e.g. {} = [\"en\"]", Self::LOCALES.as_str()),
            );
        }

        let mut seen = FxHashSet::default();
        for (i, locale) in self.locales.iter().enumerate() {
            if !Self::is_locale_code(locale) {
                diag.error_with_hint(
                    Self::LOCALES.index(i),
                    format!("'{locale}' is not a locale code"),
                    "use codes like \"en\", \"fr\" or \"zh-Hans\"",
                );
            }
            if !seen.insert(locale.as_str()) {
                diag.error(Self::LOCALES.index(i), format!("duplicate locale '{locale}'"));
            }
        }

        if self.default_locale.trim().is_empty() {
            diag.error(Self::DEFAULT_LOCALE, "must not be empty");
        } else if !self.locales.contains(&self.default_locale) {
            diag.error_with_hint(
                Self::DEFAULT_LOCALE,
                format!("'{}' is not one of {}", self.default_locale, Self::LOCALES),
                format!(
                    "add \"{}\" to {} or pick one of [{}]",
                    self.default_locale,
                    Self::LOCALES.as_str(),
                    self.locales.join(", ")
                ),
            );
        }
    }
}
