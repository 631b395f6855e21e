//! YAML front matter handling for proposal files.
//!
//! Proposal markdown opens with a `---` delimited YAML block. Metadata
//! parsing and body stripping are separate operations: a file with
//! unparseable metadata still gets its front matter removed before
//! rendering.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::models::ProposalMetadata;

/// Errors from parsing a front matter block.
#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("Invalid front matter YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn front_matter_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)\A\s*---\r?\n.*?\r?\n---").expect("front matter pattern is valid")
    })
}

/// Remove a leading front matter block and trim the remainder.
pub fn strip_front_matter(markdown: &str) -> String {
    front_matter_pattern()
        .replace(markdown, "")
        .trim()
        .to_string()
}

/// Parse the leading front matter block into proposal metadata.
///
/// Returns `Ok(None)` when the document has no front matter block.
pub fn parse_front_matter(markdown: &str) -> Result<Option<ProposalMetadata>, FrontMatterError> {
    let Some(block) = extract_block(markdown) else {
        return Ok(None);
    };

    let metadata: ProposalMetadata = serde_yaml::from_str(block)?;
    Ok(Some(metadata))
}

/// The YAML text between the opening and closing `---` lines.
fn extract_block(markdown: &str) -> Option<&str> {
    let trimmed = markdown.trim_start();
    let rest = trimmed.strip_prefix("---")?;
    let rest = rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n"))?;

    for (offset, line) in line_offsets(rest) {
        if line.trim_end() == "---" {
            return Some(&rest[..offset]);
        }
    }
    None
}

fn line_offsets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split_inclusive('\n').scan(0usize, |offset, raw| {
        let start = *offset;
        *offset = start + raw.len();
        Some((start, raw.trim_end_matches(['\r', '\n'])))
    })
}
