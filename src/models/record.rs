//! Proposal record model parsed from upstream markdown files.
//!
//! Each SIMD proposal lives as a markdown file with a YAML front matter
//! block carrying its metadata. Records missing a title or a simd number
//! are considered malformed and are skipped rather than rejected.

use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// A proposal author, parsed from front matter.
///
/// Upstream files write authors either as plain strings
/// (`"Jane Doe (Anza)"`) or as maps (`{name: ..., org: ...}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
    pub org: Option<String>,
}

impl Author {
    /// Parse an author line, splitting a trailing parenthesized org.
    pub fn from_line(line: &str) -> Self {
        let line = line.trim();
        if let (Some(open), true) = (line.rfind('('), line.ends_with(')')) {
            let name = line[..open].trim();
            let org = line[open + 1..line.len() - 1].trim();
            if !name.is_empty() && !org.is_empty() {
                return Self {
                    name: name.to_string(),
                    org: Some(org.to_string()),
                };
            }
        }
        Self {
            name: line.to_string(),
            org: None,
        }
    }

    /// Display form, `Name (Org)` when an org is present.
    pub fn display(&self) -> String {
        match &self.org {
            Some(org) => format!("{} ({})", self.name, org),
            None => self.name.clone(),
        }
    }
}

impl<'de> Deserialize<'de> for Author {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Entry {
            Line(String),
            Full { name: String, org: Option<String> },
        }

        match Entry::deserialize(deserializer)? {
            Entry::Line(line) => Ok(Author::from_line(&line)),
            Entry::Full { name, org } => Ok(Author { name, org }),
        }
    }
}

/// Metadata from a proposal's YAML front matter.
///
/// Every field is optional at parse time; well-formedness is checked
/// separately so a single malformed file cannot abort a site build.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProposalMetadata {
    /// Proposal number as authored, e.g. `"0052"`.
    #[serde(default, deserialize_with = "de_number_or_string")]
    pub simd: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Proposal category (Core, Networking, Interfaces, Meta).
    #[serde(default, rename = "type")]
    pub proposal_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Creation date as authored, typically `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "de_number_or_string")]
    pub created: Option<String>,
    #[serde(default)]
    pub authors: Vec<Author>,
}

impl ProposalMetadata {
    /// Numeric proposal number, when the authored value parses.
    pub fn simd_number(&self) -> Option<u32> {
        self.simd.as_deref()?.trim().parse().ok()
    }

    /// Creation date parsed from the common upstream formats.
    pub fn created_date(&self) -> Option<NaiveDate> {
        let raw = self.created.as_deref()?.trim();
        for format in ["%Y-%m-%d", "%b %d, %Y", "%B %d, %Y"] {
            if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
                return Some(date);
            }
        }
        None
    }
}

/// A single proposal record with metadata and (once fetched) rendered HTML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProposalRecord {
    pub metadata: ProposalMetadata,
    /// Raw-download URLs for the proposal markdown. The first entry is
    /// the canonical one.
    pub download_urls: Vec<String>,
    /// The proposal's page on the upstream repository.
    pub href: Option<String>,
    /// Rendered HTML content, populated after fetching.
    pub content: Option<String>,
}

impl ProposalRecord {
    /// Whether this record has the metadata required for a page.
    ///
    /// Files missing a title or a simd number are in an incorrect format
    /// and get no page.
    pub fn is_well_formed(&self) -> bool {
        self.metadata.simd.as_deref().is_some_and(|s| !s.is_empty())
            && self.metadata.title.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Numeric proposal number, when available.
    pub fn simd_number(&self) -> Option<u32> {
        self.metadata.simd_number()
    }

    /// Page title, `SIMD-<number> - <title>`.
    pub fn page_title(&self) -> String {
        format!(
            "SIMD-{} - {}",
            self.metadata.simd.as_deref().unwrap_or("?"),
            self.metadata.title.as_deref().unwrap_or("Untitled")
        )
    }
}

/// Accept YAML scalars that may be authored as numbers or strings.
///
/// `simd: 52` and `simd: '0052'` both appear upstream; the authored text
/// is preserved when quoted.
fn de_number_or_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Int(i64),
        Float(f64),
    }

    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Scalar::Text(s)) => Ok(Some(s)),
        Some(Scalar::Int(n)) => Ok(Some(n.to_string())),
        Some(Scalar::Float(_)) => Err(de::Error::custom("expected a string or integer")),
    }
}
