//! Leading frontmatter removal.
//!
//! Drops a metadata block that opens on the very first line of the
//! document and closes at the next line consisting of `---`:
//!
//! ```text
//! ---
//! description: hidden from the published book
//! ---
//! # Chapter
//! ```
//!
//! The block body is never parsed. Only one block, anchored at the start
//! of the text, is removed; later `---` rules are left alone.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::Transform;

/// Opening line, shortest body, closing line (newline optional at EOF).
static FRONTMATTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\r?\n(?:.*?\r?\n)??---(?:\r?\n|\z)").unwrap()
});

/// Strips a leading `---` delimited block
#[derive(Debug, Clone, Copy, Default)]
pub struct FrontmatterStrip;

impl FrontmatterStrip {
    /// Byte length of the leading block, if the text starts with one.
    pub fn block_len(text: &str) -> Option<usize> {
        FRONTMATTER.find(text).map(|m| m.end())
    }
}

impl Transform for FrontmatterStrip {
    fn transform<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let Some(end) = Self::block_len(&text) else {
            return text;
        };
        match text {
            Cow::Borrowed(s) => Cow::Owned(s[end..].to_string()),
            Cow::Owned(mut s) => {
                s.drain(..end);
                Cow::Owned(s)
            }
        }
    }
}
