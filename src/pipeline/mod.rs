//! Document rewriting pipeline.
//!
//! Threads document text through the transforms in a fixed order:
//!
//! ```text
//! text -> FrontmatterStrip -> WrapperUnwrap -> HeadingPromote (summary only) -> text
//! ```
//!
//! The pipeline knows nothing about files; `process` does the I/O.

pub mod transform;

use std::borrow::Cow;

use crate::config::TransformConfig;
use crate::debug;

pub use transform::{FrontmatterStrip, HeadingPromote, Transform, WrapperUnwrap};

// =============================================================================
// Pipeline
// =============================================================================

/// Chains transforms over a piece of text
pub struct Pipeline<'a> {
    text: Cow<'a, str>,
}

impl<'a> Pipeline<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text: Cow::Borrowed(text),
        }
    }

    /// Apply a transform.
    pub fn pipe(self, transform: &impl Transform) -> Self {
        Self {
            text: transform.transform(self.text),
        }
    }

    /// Apply a transform only when `cond` holds.
    pub fn pipe_if(self, cond: bool, transform: &impl Transform) -> Self {
        if cond { self.pipe(transform) } else { self }
    }

    pub fn into_inner(self) -> Cow<'a, str> {
        self.text
    }
}

// =============================================================================
// Rewriter
// =============================================================================

/// The configured transform set for one run
#[derive(Debug, Clone)]
pub struct Rewriter {
    frontmatter: FrontmatterStrip,
    wrapper: WrapperUnwrap,
    headings: HeadingPromote,
    summary: String,
}

impl Rewriter {
    pub fn new(config: &TransformConfig) -> Result<Self, regex::Error> {
        Ok(Self {
            frontmatter: FrontmatterStrip,
            wrapper: WrapperUnwrap::new(&config.wrapper)?,
            headings: HeadingPromote,
            summary: config.summary.clone(),
        })
    }

    /// Whether `file_name` is the summary document.
    #[inline]
    pub fn is_summary(&self, file_name: &str) -> bool {
        file_name == self.summary
    }

    /// Rewrite the text of the document named `file_name`.
    pub fn rewrite<'a>(&self, file_name: &str, text: &'a str) -> Cow<'a, str> {
        let is_summary = self.is_summary(file_name);
        if is_summary {
            debug!("rewrite"; "{} is the summary, promoting headings", file_name);
        }

        Pipeline::new(text)
            .pipe(&self.frontmatter)
            .pipe(&self.wrapper)
            .pipe_if(is_summary, &self.headings)
            .into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewriter() -> Rewriter {
        Rewriter::new(&TransformConfig::default()).unwrap()
    }

    const CHAPTER: &str = "---\ndescription: Setup\n---\n# Setup\n\n## Install\n\n<figure class=\"center\">\n\n![diagram](img/a.png)\n\n</figure>\n\nDone.\n";

    #[test]
    fn test_chapter_rewrite() {
        let out = rewriter().rewrite("setup.md", CHAPTER);
        assert_eq!(
            out,
            "# Setup\n\n## Install\n\n![diagram](img/a.png)\n\nDone.\n"
        );
    }

    #[test]
    fn test_summary_rewrite() {
        let text = "---\ntitle: toc\n---\n# Summary\n\n## Guide\n\n- [Setup](setup.md)\n### Notes\n";
        let out = rewriter().rewrite("SUMMARY.md", text);
        assert_eq!(out, "# Summary\n\n# Guide\n\n- [Setup](setup.md)\n### Notes\n");
    }

    #[test]
    fn test_headings_untouched_outside_summary() {
        let text = "## Only\n## Level two\n";
        for name in ["README.md", "summary.md", "SUMMARY.markdown", "chapter.md"] {
            assert_eq!(rewriter().rewrite(name, text), text);
        }
    }

    #[test]
    fn test_unchanged_document_stays_borrowed() {
        let out = rewriter().rewrite("plain.md", "# Plain\n\ntext\n");
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn test_pipeline_idempotent() {
        let rewriter = rewriter();
        for name in ["setup.md", "SUMMARY.md"] {
            let once = rewriter.rewrite(name, CHAPTER).into_owned();
            assert_eq!(rewriter.rewrite(name, &once), once);
        }
    }

    #[test]
    fn test_frontmatter_runs_before_unwrap() {
        // Blank lines left by the frontmatter are not part of the block.
        let out = rewriter().rewrite("a.md", "---\nk: v\n---\n\n\n\nbody\n");
        assert_eq!(out, "\n\nbody\n");
    }

    #[test]
    fn test_custom_summary_name() {
        let config = TransformConfig {
            summary: "INDEX.md".into(),
            wrapper: "figure".into(),
        };
        let rewriter = Rewriter::new(&config).unwrap();
        assert!(rewriter.is_summary("INDEX.md"));
        assert_eq!(rewriter.rewrite("INDEX.md", "## A\n"), "# A\n");
        assert_eq!(rewriter.rewrite("SUMMARY.md", "## A\n"), "## A\n");
    }
}
