//! `[prism]` section: code block highlighting.
//!
//! Theme names are presets resolved by the build tool; only their shape is
//! checked here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrismConfig {
    /// Light mode preset.
    pub theme: String,

    /// Dark mode preset.
    pub dark_theme: String,

    /// Grammars loaded on top of the build tool's defaults.
    pub additional_languages: BTreeSet<String>,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            theme: "github".into(),
            dark_theme: "dracula".into(),
            additional_languages: BTreeSet::new(),
        }
    }
}

impl PrismConfig {
    const THEME: FieldPath = FieldPath::new("prism.theme");
    const DARK_THEME: FieldPath = FieldPath::new("prism.dark_theme");
    const ADDITIONAL_LANGUAGES: FieldPath = FieldPath::new("prism.additional_languages");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, preset) in [(Self::THEME, &self.theme), (Self::DARK_THEME, &self.dark_theme)] {
            if !is_preset_name(preset) {
                diag.error_with_hint(
                    field,
                    format!("'{preset}' is not a preset name"),
                    "use a preset such as \"github\" or \"dracula\"",
                );
            }
        }
        for language in &self.additional_languages {
            if !is_preset_name(language) {
                diag.error(
                    Self::ADDITIONAL_LANGUAGES,
                    format!("'{language}' is not a language name"),
                );
            }
        }
    }
}

/// Lowercase identifiers with `-`/`_` (`github`, `vs-dark`, `night_owl`).
fn is_preset_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_'))
}
