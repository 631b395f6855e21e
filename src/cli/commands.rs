//! CLI commands implementation.

use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{load_settings, Settings};
use crate::github::GitHubClient;
use crate::models::ProposalRecord;
use crate::site::{self, SiteContent};

/// Default port for the preview server.
const DEFAULT_PORT: u16 = 3030;

#[derive(Parser)]
#[command(name = "simdocs")]
#[command(about = "Documentation site generator for Solana Improvement Documents")]
#[command(version)]
pub struct Cli {
    /// Config file path (defaults to ./simd-docs.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch all proposals and write the static site
    Build {
        /// Output directory (overrides config)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Start the preview server
    Serve {
        /// Address to bind to: PORT, HOST, or HOST:PORT (default: 127.0.0.1:3030)
        #[arg(default_value = "127.0.0.1:3030")]
        bind: String,
    },

    /// List proposal records without building pages
    List,
}

/// Parse arguments and dispatch.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Build { out } => build(&settings, out).await,
        Commands::Serve { bind } => {
            let addr = parse_bind_addr(&bind)?;
            crate::server::serve(&settings, addr).await
        }
        Commands::List => list(&settings).await,
    }
}

fn github_client(settings: &Settings) -> GitHubClient {
    GitHubClient::new(
        Duration::from_secs(settings.fetch.timeout_secs),
        settings.github_token(),
    )
}

/// Fetch every proposal record with a terminal progress bar.
async fn fetch_records_with_progress(settings: &Settings) -> anyhow::Result<Vec<ProposalRecord>> {
    let client = github_client(settings);
    let entries = client.list_directory(&settings.upstream).await?;
    let markdown: Vec<_> = entries
        .into_iter()
        .filter(|e| e.is_markdown_file())
        .collect();

    let bar = ProgressBar::new(markdown.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .expect("valid progress template"),
    );

    let mut records = Vec::with_capacity(markdown.len());
    for entry in &markdown {
        bar.set_message(entry.name.clone());
        match site::load_record(&client, entry).await {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!("Skipping {}: {}", entry.name, e),
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    Ok(records)
}

async fn build(settings: &Settings, out: Option<PathBuf>) -> anyhow::Result<()> {
    let records = fetch_records_with_progress(settings).await?;
    let content = SiteContent::from_records(records);
    anyhow::ensure!(!content.is_empty(), "No valid proposal records fetched");

    let out_dir = out.unwrap_or_else(|| settings.site.out_dir.clone());
    site::build_site(&content, settings, &out_dir)?;

    println!(
        "{} Wrote {} proposal pages to {}",
        style("done").green().bold(),
        content.len(),
        out_dir.display()
    );
    Ok(())
}

async fn list(settings: &Settings) -> anyhow::Result<()> {
    let records = fetch_records_with_progress(settings).await?;
    let content = SiteContent::from_records(records);

    println!(
        "{:<8} {:<12} {:<12} {}",
        style("SIMD").bold(),
        style("STATUS").bold(),
        style("TYPE").bold(),
        style("TITLE").bold()
    );
    for page in content.pages() {
        let meta = &page.record.metadata;
        println!(
            "{:<8} {:<12} {:<12} {}",
            meta.simd.as_deref().unwrap_or("?"),
            meta.status.as_deref().unwrap_or("-"),
            meta.proposal_type.as_deref().unwrap_or("-"),
            meta.title.as_deref().unwrap_or("")
        );
    }
    println!("\n{} proposals", content.len());

    Ok(())
}

/// Parse PORT, HOST, or HOST:PORT into a socket address.
fn parse_bind_addr(bind: &str) -> anyhow::Result<SocketAddr> {
    if let Ok(port) = bind.parse::<u16>() {
        return Ok(SocketAddr::from(([127, 0, 0, 1], port)));
    }

    let candidate = if bind.contains(':') {
        bind.to_string()
    } else {
        format!("{}:{}", bind, DEFAULT_PORT)
    };

    candidate
        .to_socket_addrs()
        .with_context(|| format!("Invalid bind address: {}", bind))?
        .next()
        .with_context(|| format!("Could not resolve bind address: {}", bind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_bind_addr_port_only() {
        let addr = parse_bind_addr("8080").unwrap();
        assert_eq!(addr, SocketAddr::from(([127, 0, 0, 1], 8080)));
    }

    #[test]
    fn test_parse_bind_addr_host_and_port() {
        let addr = parse_bind_addr("0.0.0.0:3000").unwrap();
        assert_eq!(addr, SocketAddr::from(([0, 0, 0, 0], 3000)));
    }

    #[test]
    fn test_parse_bind_addr_host_only() {
        let addr = parse_bind_addr("0.0.0.0").unwrap();
        assert_eq!(addr, SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)));
    }

    #[test]
    fn test_parse_bind_addr_invalid() {
        assert!(parse_bind_addr("not a host:what").is_err());
    }
}
