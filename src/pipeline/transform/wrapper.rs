//! Wrapper tag removal.
//!
//! Deletes every opening tag of the wrapper element (with whatever
//! attributes it carries) and every exact closing tag, leaving the content
//! between them in place. Opens and closes are removed independently, so
//! unbalanced or nested markup degrades to "tags gone, text kept".
//!
//! Tag lines leave blank lines behind; any whitespace run spanning three or
//! more newlines is then collapsed to a single blank line.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::{Transform, replace_all};

static BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n").unwrap());

/// Removes `<tag ...>` / `</tag>` pairs, keeping inner content
#[derive(Debug, Clone)]
pub struct WrapperUnwrap {
    open: Regex,
    close: String,
}

impl WrapperUnwrap {
    /// Build for a tag name such as `figure`.
    pub fn new(tag: &str) -> Result<Self, regex::Error> {
        let open = Regex::new(&format!(r"<{}(?:[\s/][^>]*)?>", regex::escape(tag)))?;
        Ok(Self {
            open,
            close: format!("</{tag}>"),
        })
    }
}

impl Transform for WrapperUnwrap {
    fn transform<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let text = replace_all(&self.open, text, "");
        let text = if text.contains(&self.close) {
            Cow::Owned(text.replace(&self.close, ""))
        } else {
            text
        };
        replace_all(&BLANK_RUN, text, "\n\n")
    }
}
