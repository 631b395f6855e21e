//! Preview server for the documentation site.
//!
//! Fetches all proposal records once at startup and renders pages from
//! memory. Useful for checking a build before publishing it.

mod handlers;
mod routes;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Settings;
use crate::github::GitHubClient;
use crate::site::{self, SiteContent};

/// Shared state for the preview server.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<SiteContent>,
    pub site_name: String,
    pub base_url: String,
}

impl AppState {
    pub fn new(content: SiteContent, settings: &Settings) -> Self {
        Self {
            content: Arc::new(content),
            site_name: settings.site.name.clone(),
            base_url: settings.site.base_url.clone(),
        }
    }
}

/// Fetch records and start the preview server.
pub async fn serve(settings: &Settings, addr: SocketAddr) -> anyhow::Result<()> {
    let client = GitHubClient::new(
        Duration::from_secs(settings.fetch.timeout_secs),
        settings.github_token(),
    );

    let records = site::fetch_all_records(&client, settings).await?;
    let content = SiteContent::from_records(records);
    if content.is_empty() {
        tracing::warn!("No valid proposal records fetched; serving an empty index");
    }

    let state = AppState::new(content, settings);
    let app = create_router(state);

    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
