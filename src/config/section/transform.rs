//! `[transform]` section configuration.
//!
//! Names the transforms key off. The transform order itself is fixed.
//!
//! # Example
//!
//! ```toml
//! [transform]
//! summary = "SUMMARY.md"      # File whose `## ` headings become `# `
//! wrapper = "figure"          # Tag removed while keeping its content
//! ```

use serde::{Deserialize, Serialize};

/// Transform settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Basename of the summary document.
    pub summary: String,

    /// Name of the wrapper tag to unwrap.
    pub wrapper: String,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            summary: "SUMMARY.md".into(),
            wrapper: "figure".into(),
        }
    }
}

/// Check a tag name is `[A-Za-z][A-Za-z0-9-]*`.
pub fn is_valid_tag_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}
