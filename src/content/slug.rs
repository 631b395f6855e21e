//! Slug computation for proposal routing and static paths.

use crate::models::ProposalRecord;

/// Kebab-case a title for use in a URL.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    out
}

/// Compute the URL slug for a proposal record.
///
/// The slug is the zero-padded proposal number followed by the
/// kebab-cased title, e.g. `0052-consensus-votes`. Records without the
/// required metadata have no slug and therefore no page.
pub fn compute_slug(record: &ProposalRecord) -> Option<String> {
    if !record.is_well_formed() {
        return None;
    }

    let title = record.metadata.title.as_deref().unwrap_or_default();
    let number = match record.simd_number() {
        Some(n) => format!("{:04}", n),
        // Non-numeric proposal numbers pass through as authored.
        None => record.metadata.simd.clone().unwrap_or_default(),
    };

    Some(format!("{}-{}", number, slugify(title)))
}
