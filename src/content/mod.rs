//! Proposal content processing: front matter, slugs, and markdown.

mod frontmatter;
mod markdown;
mod slug;

pub use frontmatter::{parse_front_matter, strip_front_matter, FrontMatterError};
pub use markdown::markdown_to_html;
pub use slug::{compute_slug, slugify};
