//! Run configuration for `docprep.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [source] and [transform]
//! ├── error          # ConfigError
//! ├── util           # config lookup and root anchoring
//! └── mod.rs         # PrepConfig (this file)
//! ```
//!
//! The config file is optional. Every field has a default matching the
//! conventional layout: documents under `<root>/src`, `SUMMARY.md` as the
//! summary document and `<figure>` as the wrapper tag.

mod error;
mod section;
mod util;

pub use error::ConfigError;
pub use section::{SourceConfig, TransformConfig};

use section::is_valid_tag_name;
use util::{anchor_from_exe, find_config_file};

use crate::{cli::Cli, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docprep.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrepConfig {
    /// Path to the config file, when one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Repository root the source directory is resolved against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Skip writing changed documents (internal use only)
    #[serde(skip)]
    pub dry_run: bool,

    /// Document tree settings
    #[serde(default)]
    pub source: SourceConfig,

    /// Transform settings
    #[serde(default)]
    pub transform: TransformConfig,
}

impl PrepConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. The repository root is
    /// `--root` if given, else the config file's parent directory, else two
    /// levels above the executable's directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let config_path = find_config_file(&cli.config, &cwd);

        let mut config = match &config_path {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };

        config.root = match (&cli.root, &config_path) {
            (Some(root), _) => cwd.join(root),
            (None, Some(path)) => path.parent().map(Path::to_path_buf).unwrap_or(cwd),
            (None, None) => {
                let exe = std::env::current_exe().context("Failed to locate the executable")?;
                anchor_from_exe(&exe)
            }
        };
        config.config_path = config_path;
        config.dry_run = cli.dry_run;
        config.source.normalize();
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            log!("warning"; "ignoring unknown fields in {}: {}", path.display(), ignored.join(", "));
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Reject values the transforms cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation("[source] dir is empty".into()));
        }
        if self.source.extension.is_empty() {
            return Err(ConfigError::Validation("[source] extension is empty".into()));
        }
        let summary = &self.transform.summary;
        if summary.is_empty() || summary.contains(['/', '\\']) {
            return Err(ConfigError::Validation(format!(
                "[transform] summary must be a bare file name, got `{summary}`"
            )));
        }
        if !is_valid_tag_name(&self.transform.wrapper) {
            return Err(ConfigError::Validation(format!(
                "[transform] wrapper must be a tag name, got `{}`",
                self.transform.wrapper
            )));
        }
        Ok(())
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Absolute source directory (`root` joined with `[source] dir`).
    pub fn source_dir(&self) -> PathBuf {
        self.root.join(&self.source.dir)
    }
}

/// Parse a config for tests, failing on unknown fields.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> PrepConfig {
    let (parsed, ignored) = PrepConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
