//! Document processing over a source tree.
//!
//! # Flow
//!
//! ```text
//! discover(source_dir) ─► for each path: process_one ─► RunSummary
//!                                │
//!                                ├─ read (UTF-8)
//!                                ├─ Rewriter::rewrite
//!                                └─ write back iff bytes differ
//! ```
//!
//! Everything runs sequentially on the calling thread. A failing document
//! is reported and counted; it never stops the run.

mod document;
mod error;
mod report;
mod scan;


pub use document::Document;
pub use error::ProcessError;
pub use report::RunSummary;
pub use scan::discover;

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::PrepConfig;
use crate::{debug, log};
use crate::pipeline::Rewriter;

/// What happened to one document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Content changed (and was written, unless dry run).
    Changed,
    /// Content already publishable; file untouched.
    Unchanged,
}

/// Applies the rewrite pipeline to documents on disk
pub struct Processor {
    rewriter: Rewriter,
    extension: String,
    dry_run: bool,
}

impl Processor {
    pub fn new(config: &PrepConfig) -> Result<Self> {
        let rewriter = Rewriter::new(&config.transform).with_context(|| {
            format!("invalid wrapper tag `{}`", config.transform.wrapper)
        })?;
        Ok(Self {
            rewriter,
            extension: config.source.extension.clone(),
            dry_run: config.dry_run,
        })
    }

    /// Rewrite one document in place if its content changes.
    pub fn process_one(&self, path: &Path) -> Result<FileOutcome, ProcessError> {
        let doc = Document::read(path)?;
        let rewritten = self.rewriter.rewrite(doc.file_name(), &doc.text);

        if rewritten.as_bytes() == doc.text.as_bytes() {
            log!("process"; "no changes: {}", path.display());
            return Ok(FileOutcome::Unchanged);
        }

        if self.dry_run {
            log!("process"; "would process: {}", path.display());
        } else {
            doc.write(&rewritten)?;
            log!("process"; "processed: {}", path.display());
        }
        Ok(FileOutcome::Changed)
    }

    /// Process every document under `source_dir`.
    pub fn run(&self, source_dir: &Path) -> RunSummary {
        let mut summary = RunSummary::new(self.dry_run);

        let files: Vec<_> = discover(source_dir, &self.extension).collect();
        summary.discovered = files.len();

        if files.is_empty() {
            log!("scan"; "no .{} files found to process", self.extension);
            return summary;
        }
        log!("scan"; "found {} .{} files to process", summary.discovered, self.extension);

        for path in &files {
            let outcome = self.process_one(path);
            if let Err(e) = &outcome {
                log!("error"; "error processing {}: {}", e.path().display(), e.cause());
            }
            summary.record(&outcome);
        }

        debug!("summary"; "{} unchanged", summary.unchanged);
        log!("summary"; "{}", summary);
        summary.print_failures();
        summary
    }
}
