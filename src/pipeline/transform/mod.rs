//! Text transforms applied to each document.
//!
//! Each transform is a pure `text -> text` rewrite, composed via `Pipeline`.
//!
//! # Modules
//!
//! - `frontmatter`: Removes a leading `---` metadata block
//! - `wrapper`: Removes wrapper tags (`<figure>`), keeping their content
//! - `heading`: Promotes `## ` headings to `# ` (summary document only)

mod frontmatter;
mod heading;
mod wrapper;

pub use frontmatter::FrontmatterStrip;
pub use heading::HeadingPromote;
pub use wrapper::WrapperUnwrap;

use regex::Regex;
use std::borrow::Cow;

/// A pure rewrite of document text.
///
/// Implementations hand back the input untouched when there is nothing
/// to rewrite, so unchanged documents never allocate.
pub trait Transform {
    fn transform<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}

/// `Regex::replace_all` over a `Cow`, keeping the input when nothing matched.
fn replace_all<'a>(re: &Regex, text: Cow<'a, str>, rep: &str) -> Cow<'a, str> {
    let replaced = match re.replace_all(&text, rep) {
        Cow::Owned(s) => Some(s),
        Cow::Borrowed(_) => None,
    };
    replaced.map_or(text, Cow::Owned)
}
