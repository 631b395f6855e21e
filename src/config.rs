//! Configuration for simd-docs.
//!
//! Settings load from an optional TOML file (`simd-docs.toml` in the
//! working directory by default) with sensible defaults pointing at the
//! upstream SIMD repository. The GitHub token is taken from the
//! environment, never from the config file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding an optional GitHub API token.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Upstream repository holding the proposal markdown files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Upstream {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    /// Directory within the repository containing proposal files.
    pub path: String,
}

impl Default for Upstream {
    fn default() -> Self {
        Self {
            owner: "solana-foundation".to_string(),
            repo: "solana-improvement-documents".to_string(),
            branch: "main".to_string(),
            path: "proposals".to_string(),
        }
    }
}

/// Site-level presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Site {
    /// Site name used in page titles and the header.
    pub name: String,
    /// Public base URL, used for share links.
    pub base_url: String,
    /// Output directory for static builds.
    pub out_dir: PathBuf,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            name: "Solana SIMD".to_string(),
            base_url: "https://solana.com".to_string(),
            out_dir: PathBuf::from("dist"),
        }
    }
}

/// Fetch behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fetch {
    pub timeout_secs: u64,
}

impl Default for Fetch {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub upstream: Upstream,
    pub site: Site,
    pub fetch: Fetch,
}

impl Settings {
    /// GitHub API token from the environment, if set.
    pub fn github_token(&self) -> Option<String> {
        std::env::var(GITHUB_TOKEN_ENV)
            .ok()
            .filter(|t| !t.is_empty())
    }
}

/// Load settings from an explicit path, or from `simd-docs.toml` in the
/// working directory when present, or defaults otherwise.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let default = PathBuf::from("simd-docs.toml");
            if !default.exists() {
                tracing::info!("No config file found, using defaults");
                return Ok(Settings::default());
            }
            default
        }
    };

    let raw = fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    let settings: Settings = toml::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(settings)
}
