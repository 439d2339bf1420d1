//! A document read from disk.

use std::fs;
use std::path::{Path, PathBuf};

use super::ProcessError;

/// A document and the text it had when read
#[derive(Debug)]
pub struct Document {
    pub path: PathBuf,
    pub text: String,
}

impl Document {
    /// Read the whole file as UTF-8.
    pub fn read(path: &Path) -> Result<Self, ProcessError> {
        let bytes = fs::read(path).map_err(|e| ProcessError::Read(path.to_path_buf(), e))?;
        let text =
            String::from_utf8(bytes).map_err(|e| ProcessError::Encoding(path.to_path_buf(), e))?;
        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    /// Basename used to select file-specific transforms.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }

    /// Overwrite the file with `text` in one write.
    pub fn write(&self, text: &str) -> Result<(), ProcessError> {
        fs::write(&self.path, text).map_err(|e| ProcessError::Write(self.path.clone(), e))
    }
}
