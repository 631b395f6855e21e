//! HTML rendering for the documentation site.

mod assets;
mod templates;

pub use assets::{CSS, JS};
pub use templates::{base_template, not_found_page, proposal_index, proposal_page, PageLink};
