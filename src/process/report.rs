//! Run summary types and formatting.

use std::fmt;
use std::path::PathBuf;

use owo_colors::Style;

use super::{FileOutcome, ProcessError};
use crate::logger::styled;

/// A document that could not be processed
#[derive(Debug, Clone)]
pub struct Failure {
    pub path: PathBuf,
    /// Operation and underlying cause.
    pub cause: String,
}

/// Counts for one run
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Documents found under the source directory.
    pub discovered: usize,
    /// Documents whose content changed (written unless dry run).
    pub changed: usize,
    /// Documents already in publishable form.
    pub unchanged: usize,
    /// Documents that failed, in processing order.
    pub failures: Vec<Failure>,
    /// Whether changed documents were left unwritten.
    pub dry_run: bool,
}

impl RunSummary {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    /// Record the outcome of one document.
    pub fn record(&mut self, outcome: &Result<FileOutcome, ProcessError>) {
        match outcome {
            Ok(FileOutcome::Changed) => self.changed += 1,
            Ok(FileOutcome::Unchanged) => self.unchanged += 1,
            Err(e) => self.failures.push(Failure {
                path: e.path().to_path_buf(),
                cause: e.cause(),
            }),
        }
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Process exit status. Per-file failures are informational only.
    pub const fn exit_code(&self) -> u8 {
        0
    }

    /// Print failed documents grouped under an `errors` header.
    pub fn print_failures(&self) {
        if self.failures.is_empty() {
            return;
        }
        println!();
        println!(
            "{} {}",
            styled("errors", Style::new().red().bold()),
            styled(
                &format!("({})", plural_count(self.failed(), "file")),
                Style::new().dimmed()
            )
        );
        for failure in &self.failures {
            println!(
                "{}{}{} {} {}",
                styled("[", Style::new().dimmed()),
                styled(&failure.path.display().to_string(), Style::new().cyan()),
                styled("]", Style::new().dimmed()),
                styled("→", Style::new().red()),
                failure.cause
            );
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.dry_run {
            "would process"
        } else {
            "successfully processed"
        };
        write!(f, "{} {}", verb, plural_count(self.changed, "file"))?;
        if !self.failures.is_empty() {
            let failed = format!("{} failed", self.failed());
            write!(f, ", {}", styled(&failed, Style::new().red().bold()))?;
        }
        Ok(())
    }
}

/// Format count with noun, handling pluralization
///
/// - `plural_count(0, "file")` -> `"0 files"`
/// - `plural_count(1, "file")` -> `"1 file"`
pub fn plural_count(count: usize, noun: &str) -> String {
    let s = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{s}")
}
