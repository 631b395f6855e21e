//! simd-docs - documentation site generator for Solana Improvement Documents.
//!
//! Fetches SIMD proposal records from the upstream GitHub repository,
//! renders their markdown to HTML, and produces a browsable documentation
//! site either as static output or through a preview server.

mod cli;
mod config;
mod content;
mod github;
mod models;
mod render;
mod server;
mod site;
mod utils;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    // Initialize logging based on verbosity
    let default_filter = if cli::is_verbose() {
        "simd_docs=info"
    } else {
        "simd_docs=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Run CLI
    cli::run().await
}
