//! Per-document error types.

use std::error::Error as _;
use std::io;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use thiserror::Error;

/// Failure while processing one document
///
/// Never aborts a run: the orchestrator records it and moves on.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to read `{}`", .0.display())]
    Read(PathBuf, #[source] io::Error),

    #[error("`{}` is not valid UTF-8", .0.display())]
    Encoding(PathBuf, #[source] FromUtf8Error),

    #[error("failed to write `{}`", .0.display())]
    Write(PathBuf, #[source] io::Error),
}

impl ProcessError {
    /// Path of the document that failed.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read(path, _) | Self::Encoding(path, _) | Self::Write(path, _) => path,
        }
    }

    /// Operation and underlying cause, without the path.
    pub fn cause(&self) -> String {
        let op = match self {
            Self::Read(..) => "read",
            Self::Encoding(..) => "decode",
            Self::Write(..) => "write",
        };
        match self.source() {
            Some(source) => format!("{op}: {source}"),
            None => op.to_string(),
        }
    }
}
