//! Heading promotion for the summary document.
//!
//! mdBook-style `SUMMARY.md` files group chapters under `## Part` headings;
//! the published summary wants them as `# Part`. Only lines starting with
//! exactly `## ` are touched.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::{Transform, replace_all};

static SUBHEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^## ").unwrap());

/// Rewrites `## ` line prefixes to `# `
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingPromote;

impl Transform for HeadingPromote {
    fn transform<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        replace_all(&SUBHEADING, text, "# ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn promote(text: &str) -> String {
        HeadingPromote.transform(Cow::Borrowed(text)).into_owned()
    }

    #[test]
    fn test_promotes_level_two() {
        assert_eq!(promote("## Part One\n"), "# Part One\n");
        assert_eq!(
            promote("# Summary\n\n## Guide\n- [Intro](intro.md)\n## Reference\n"),
            "# Summary\n\n# Guide\n- [Intro](intro.md)\n# Reference\n"
        );
    }

    #[test]
    fn test_other_levels_untouched() {
        let text = "# Title\n### Deeper\n#### Deepest\n##NoSpace\n text ## inline\n";
        assert_eq!(promote(text), text);
    }

    #[test]
    fn test_rest_of_line_untouched() {
        assert_eq!(promote("## a ## b  \n"), "# a ## b  \n");
    }

    #[test]
    fn test_idempotent() {
        let text = "## A\n### B\n# C\n## D";
        let once = promote(text);
        assert_eq!(promote(&once), once);
    }
}
