//! `[source]` section configuration.
//!
//! Where the documents live and which files count as documents.
//!
//! # Example
//!
//! ```toml
//! [source]
//! dir = "src"                 # Document tree (relative to repository root)
//! extension = "md"            # File extension of documents
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Document tree settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Source directory, relative to the repository root.
    pub dir: PathBuf,

    /// Document extension, without the leading dot.
    pub extension: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            dir: "src".into(),
            extension: "md".into(),
        }
    }
}

impl SourceConfig {
    /// Strip a leading dot so `".md"` and `"md"` behave the same.
    pub fn normalize(&mut self) {
        if let Some(ext) = self.extension.strip_prefix('.') {
            self.extension = ext.to_string();
        }
    }
}
