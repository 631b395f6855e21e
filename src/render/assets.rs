//! Static asset constants (CSS and JavaScript).

/// Stylesheet for the documentation site.
pub const CSS: &str = include_str!("styles.css");

/// JavaScript for mobile tab switching.
pub const JS: &str = include_str!("page.js");
