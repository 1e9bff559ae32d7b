//! `[footer]` section.

use serde::{Deserialize, Serialize};

/// Footer content, passed to the build tool verbatim (may contain markup).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub copyright: String,
}
