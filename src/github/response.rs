//! Response types for the GitHub contents API.

use serde::Deserialize;

/// One entry from a contents-API directory listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    pub path: String,
    /// `file`, `dir`, `symlink`, or `submodule`.
    #[serde(rename = "type")]
    pub entry_type: String,
    /// Raw-download URL; absent for directories.
    pub download_url: Option<String>,
    /// The entry's page on github.com.
    pub html_url: Option<String>,
}

impl ContentEntry {
    /// Whether this entry is a markdown file worth parsing.
    pub fn is_markdown_file(&self) -> bool {
        self.entry_type == "file" && self.name.ends_with(".md")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"[
      {
        "name": "0052-consensus-votes.md",
        "path": "proposals/0052-consensus-votes.md",
        "sha": "abc123",
        "size": 4096,
        "type": "file",
        "download_url": "https://raw.githubusercontent.com/o/r/main/proposals/0052-consensus-votes.md",
        "html_url": "https://github.com/o/r/blob/main/proposals/0052-consensus-votes.md"
      },
      {
        "name": "assets",
        "path": "proposals/assets",
        "sha": "def456",
        "size": 0,
        "type": "dir",
        "download_url": null,
        "html_url": "https://github.com/o/r/tree/main/proposals/assets"
      },
      {
        "name": "README.txt",
        "path": "proposals/README.txt",
        "sha": "789abc",
        "size": 12,
        "type": "file",
        "download_url": "https://raw.githubusercontent.com/o/r/main/proposals/README.txt",
        "html_url": "https://github.com/o/r/blob/main/proposals/README.txt"
      }
    ]"#;

    #[test]
    fn test_deserialize_listing() {
        let entries: Vec<ContentEntry> = serde_json::from_str(LISTING).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].name, "0052-consensus-votes.md");
        assert!(entries[0].download_url.is_some());
        assert_eq!(entries[1].entry_type, "dir");
        assert!(entries[1].download_url.is_none());
    }

    #[test]
    fn test_is_markdown_file() {
        let entries: Vec<ContentEntry> = serde_json::from_str(LISTING).unwrap();
        assert!(entries[0].is_markdown_file());
        assert!(!entries[1].is_markdown_file());
        assert!(!entries[2].is_markdown_file());
    }
}
