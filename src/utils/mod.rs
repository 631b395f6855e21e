//! Shared utilities.

mod html;
mod share;

pub use html::html_escape;
pub use share::share_on_twitter_url;
