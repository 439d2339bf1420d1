//! Configuration section definitions.

mod source;
mod transform;

pub use source::SourceConfig;
pub use transform::{TransformConfig, is_valid_tag_name};
