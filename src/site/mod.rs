//! Site assembly: record loading, page ordering, and static builds.

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::config::Settings;
use crate::content::{compute_slug, markdown_to_html, parse_front_matter, strip_front_matter};
use crate::github::{ContentEntry, FetchError, GitHubClient};
use crate::models::ProposalRecord;
use crate::render::{self, PageLink};

/// One proposal page keyed by its slug.
#[derive(Debug, Clone)]
pub struct ProposalPage {
    pub slug: String,
    pub record: ProposalRecord,
}

impl ProposalPage {
    /// Navigation link for this page, labeled by proposal number.
    pub fn nav_link(&self) -> PageLink {
        PageLink {
            href: self.slug.clone(),
            label: format!("SIMD-{}", self.record.metadata.simd.as_deref().unwrap_or("?")),
        }
    }
}

/// All proposal pages, ordered by proposal number.
///
/// Assembly is pure given already-fetched records, so page ordering and
/// navigation are testable without the network.
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    pages: Vec<ProposalPage>,
}

impl SiteContent {
    /// Build site content from fetched records.
    ///
    /// Records missing a title or simd number get no page; they are
    /// logged and dropped rather than failing the whole build.
    pub fn from_records(records: Vec<ProposalRecord>) -> Self {
        let mut pages: Vec<ProposalPage> = records
            .into_iter()
            .filter_map(|record| match compute_slug(&record) {
                Some(slug) => Some(ProposalPage { slug, record }),
                None => {
                    tracing::warn!(
                        "Skipping record in incorrect format (missing title or simd number): {:?}",
                        record.download_urls.first()
                    );
                    None
                }
            })
            .collect();

        pages.sort_by(|a, b| {
            match (a.record.simd_number(), b.record.simd_number()) {
                (Some(x), Some(y)) => x.cmp(&y),
                // Numbered proposals sort ahead of oddballs.
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => a.slug.cmp(&b.slug),
            }
        });

        Self { pages }
    }

    pub fn pages(&self) -> &[ProposalPage] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Look up a page by slug.
    pub fn page(&self, slug: &str) -> Option<&ProposalPage> {
        self.pages.iter().find(|p| p.slug == slug)
    }

    /// Previous and next pages in proposal-number order.
    pub fn neighbors(&self, slug: &str) -> (Option<&ProposalPage>, Option<&ProposalPage>) {
        let Some(index) = self.pages.iter().position(|p| p.slug == slug) else {
            return (None, None);
        };

        let prev = index.checked_sub(1).map(|i| &self.pages[i]);
        let next = self.pages.get(index + 1);
        (prev, next)
    }
}

/// Load one proposal record from a directory entry.
///
/// Front matter that fails to parse leaves the record with empty
/// metadata; it is dropped later as malformed instead of aborting the
/// run.
pub async fn load_record(
    client: &GitHubClient,
    entry: &ContentEntry,
) -> Result<ProposalRecord, FetchError> {
    let url = entry
        .download_url
        .as_deref()
        .ok_or_else(|| FetchError::MissingDownloadUrl(entry.path.clone()))?;

    let raw = client.fetch_raw(url).await?;

    let metadata = match parse_front_matter(&raw) {
        Ok(Some(metadata)) => metadata,
        Ok(None) => {
            tracing::warn!("No front matter in {}", entry.name);
            Default::default()
        }
        Err(e) => {
            tracing::warn!("Bad front matter in {}: {}", entry.name, e);
            Default::default()
        }
    };

    let body = strip_front_matter(&raw);
    let content = markdown_to_html(&body);

    Ok(ProposalRecord {
        metadata,
        download_urls: vec![url.to_string()],
        href: entry.html_url.clone(),
        content: Some(content),
    })
}

/// Fetch and parse every proposal record from the upstream repository.
pub async fn fetch_all_records(
    client: &GitHubClient,
    settings: &Settings,
) -> Result<Vec<ProposalRecord>, FetchError> {
    let entries = client.list_directory(&settings.upstream).await?;

    let mut records = Vec::new();
    for entry in entries.iter().filter(|e| e.is_markdown_file()) {
        match load_record(client, entry).await {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!("Skipping {}: {}", entry.name, e),
        }
    }

    Ok(records)
}

/// Write the static site to `out_dir`.
///
/// Produces `index.html`, `simd/index.html`, one `simd/<slug>/index.html`
/// per valid record, and the static assets. Only known slugs get pages.
pub fn build_site(content: &SiteContent, settings: &Settings, out_dir: &Path) -> anyhow::Result<()> {
    let site_name = &settings.site.name;

    let static_dir = out_dir.join("static");
    fs::create_dir_all(&static_dir)
        .with_context(|| format!("Failed to create {}", static_dir.display()))?;
    fs::write(static_dir.join("style.css"), render::CSS)?;
    fs::write(static_dir.join("page.js"), render::JS)?;

    let pairs: Vec<(&str, &ProposalRecord)> = content
        .pages()
        .iter()
        .map(|p| (p.slug.as_str(), &p.record))
        .collect();
    let index_html = render::proposal_index(&pairs, site_name);

    let simd_dir = out_dir.join("simd");
    fs::create_dir_all(&simd_dir)?;
    fs::write(out_dir.join("index.html"), &index_html)?;
    fs::write(simd_dir.join("index.html"), &index_html)?;

    for page in content.pages() {
        let (prev, next) = content.neighbors(&page.slug);
        let html = render::proposal_page(
            &page.record,
            &page.slug,
            site_name,
            &settings.site.base_url,
            prev.map(ProposalPage::nav_link).as_ref(),
            next.map(ProposalPage::nav_link).as_ref(),
        );

        let page_dir = simd_dir.join(&page.slug);
        fs::create_dir_all(&page_dir)?;
        fs::write(page_dir.join("index.html"), html)
            .with_context(|| format!("Failed to write page for {}", page.slug))?;
    }

    tracing::info!(
        "Wrote {} proposal pages to {}",
        content.len(),
        out_dir.display()
    );
    Ok(())
}
