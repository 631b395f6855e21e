//! HTML templates for the documentation site.
//!
//! A proposal page is a hero (title + share actions), a mobile-only
//! subnav for tab switching, and a two-column body: the rendered
//! proposal on the left, a sticky details sidebar on the right.

use crate::models::ProposalRecord;
use crate::utils::{html_escape, share_on_twitter_url};

/// Fallback article body when a proposal's content could not be fetched.
const MISSING_CONTENT: &str = "[unable to fetch SIMD proposal]";

/// A link to a neighboring proposal page.
#[derive(Debug, Clone)]
pub struct PageLink {
    pub href: String,
    pub label: String,
}

/// Base HTML shell shared by every page.
pub fn base_template(title: &str, site_name: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - {site_name}</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <header id="main-header">
        <nav>
            <a href="/" class="logo">{site_name}</a>
            <a href="/simd">proposals</a>
        </nav>
    </header>
    <main>
        {content}
    </main>
    <script src="/static/page.js"></script>
</body>
</html>"#,
        title = html_escape(title),
        site_name = html_escape(site_name),
        content = content,
    )
}

/// Render a single proposal page.
pub fn proposal_page(
    record: &ProposalRecord,
    slug: &str,
    site_name: &str,
    base_url: &str,
    prev: Option<&PageLink>,
    next: Option<&PageLink>,
) -> String {
    let meta = &record.metadata;
    let title = meta.title.as_deref().unwrap_or("Untitled");
    let simd = meta.simd.as_deref().unwrap_or("?");

    let share_url = share_on_twitter_url(
        base_url,
        &format!("/simd/{}", slug),
        &format!("Checkout SIMD-{} - {}", simd, title),
    );

    let hero_title = match &record.href {
        Some(href) => format!(
            r#"<a href="{}">{}</a>"#,
            html_escape(href),
            html_escape(title)
        ),
        None => html_escape(title),
    };

    let content = record.content.as_deref().unwrap_or(MISSING_CONTENT);

    let mut details = String::new();
    details.push_str(&format!("<li>SIMD: #<span>{}</span></li>\n", html_escape(simd)));
    if let Some(created) = &meta.created {
        details.push_str(&format!("<li>Created: {}</li>\n", html_escape(created)));
    }
    if let Some(proposal_type) = &meta.proposal_type {
        details.push_str(&format!("<li>Type: {}</li>\n", html_escape(proposal_type)));
    }
    if let Some(status) = &meta.status {
        details.push_str(&format!("<li>Status: {}</li>\n", html_escape(status)));
    }
    if !meta.authors.is_empty() {
        let mut items = String::new();
        for author in &meta.authors {
            items.push_str(&format!("<li>{}</li>\n", html_escape(&author.display())));
        }
        details.push_str(&format!(
            "<li><p>Authors:</p><ul class=\"author-list\">\n{}</ul></li>\n",
            items
        ));
    }

    let nav_buttons = format!(
        r#"<nav class="next-prev">
            {prev}
            {next}
        </nav>"#,
        prev = prev
            .map(|p| format!(
                r#"<a class="btn" href="/simd/{}">&larr; {}</a>"#,
                html_escape(&p.href),
                html_escape(&p.label)
            ))
            .unwrap_or_default(),
        next = next
            .map(|n| format!(
                r#"<a class="btn btn-right" href="/simd/{}">{} &rarr;</a>"#,
                html_escape(&n.href),
                html_escape(&n.label)
            ))
            .unwrap_or_default(),
    );

    let body = format!(
        r##"<section class="page-hero">
        <h1>{hero_title}</h1>
        <section class="cta-section">
            <a href="/simd" class="btn btn-default">Back to SIMD</a>
            <a href="{share_url}" target="_blank" rel="noopener" class="btn btn-dark">Share on X</a>
        </section>
    </section>

    <nav class="subnav mobile-only">
        <a href="#content" class="subnav-item active" data-tab="content">Content</a>
        <a href="#details" class="subnav-item" data-tab="details">Details</a>
    </nav>

    <section class="wrapper">
        <section id="content" class="content-column tab-pane active" data-pane="content">
            <article class="prose">{content}</article>
            {nav_buttons}
        </section>

        <aside class="details-sidebar">
            <section id="details" class="tab-pane" data-pane="details">
                <h3>Details</h3>
                <ul class="details-list">
{details}                </ul>
            </section>
        </aside>
    </section>"##,
        hero_title = hero_title,
        share_url = html_escape(&share_url),
        content = content,
        nav_buttons = nav_buttons,
        details = details,
    );

    base_template(&record.page_title(), site_name, &body)
}

/// Render the proposal index page.
///
/// `pages` is `(slug, record)` pairs, already ordered by proposal number.
pub fn proposal_index(pages: &[(&str, &ProposalRecord)], site_name: &str) -> String {
    let mut rows = String::new();

    for (slug, record) in pages {
        let meta = &record.metadata;
        let created = meta
            .created_date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .or_else(|| meta.created.clone())
            .unwrap_or_default();

        rows.push_str(&format!(
            r#"
        <tr>
            <td>#{simd}</td>
            <td><a href="/simd/{slug}">{title}</a></td>
            <td>{proposal_type}</td>
            <td>{status}</td>
            <td>{created}</td>
        </tr>
        "#,
            simd = html_escape(meta.simd.as_deref().unwrap_or("?")),
            slug = html_escape(slug),
            title = html_escape(meta.title.as_deref().unwrap_or("Untitled")),
            proposal_type = html_escape(meta.proposal_type.as_deref().unwrap_or("")),
            status = html_escape(meta.status.as_deref().unwrap_or("")),
            created = html_escape(&created),
        ));
    }

    let body = format!(
        r#"<section class="page-hero">
        <h1>Solana Improvement Documents</h1>
    </section>
    <table class="proposal-listing">
        <thead>
            <tr>
                <th>SIMD</th>
                <th>Title</th>
                <th>Type</th>
                <th>Status</th>
                <th>Created</th>
            </tr>
        </thead>
        <tbody>
            {rows}
        </tbody>
    </table>"#,
        rows = rows
    );

    base_template("SIMD Proposals", site_name, &body)
}

/// Render the not-found page for unknown slugs.
pub fn not_found_page(site_name: &str) -> String {
    base_template(
        "Not Found",
        site_name,
        r#"<p>Proposal not found. <a href="/simd">Back to SIMD</a></p>"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Author, ProposalMetadata, ProposalRecord};

    fn sample_record() -> ProposalRecord {
        ProposalRecord {
            metadata: ProposalMetadata {
                simd: Some("0052".to_string()),
                title: Some("Consensus & Votes".to_string()),
                proposal_type: Some("Core".to_string()),
                status: Some("Draft".to_string()),
                created: Some("2023-05-02".to_string()),
                authors: vec![Author {
                    name: "Jane Doe".to_string(),
                    org: Some("Anza".to_string()),
                }],
            },
            download_urls: vec!["https://raw.example/0052.md".to_string()],
            href: Some("https://github.com/o/r/blob/main/proposals/0052.md".to_string()),
            content: Some("<h2>Summary</h2>".to_string()),
        }
    }

    #[test]
    fn test_proposal_page_contains_details() {
        let html = proposal_page(
            &sample_record(),
            "0052-consensus-votes",
            "Solana SIMD",
            "https://solana.com",
            None,
            None,
        );
        assert!(html.contains("SIMD: #<span>0052</span>"));
        assert!(html.contains("Created: 2023-05-02"));
        assert!(html.contains("Type: Core"));
        assert!(html.contains("Status: Draft"));
        assert!(html.contains("Jane Doe (Anza)"));
        assert!(html.contains("<h2>Summary</h2>"));
        // Title is escaped in the hero and page title
        assert!(html.contains("Consensus &amp; Votes"));
        assert!(html.contains("SIMD-0052 - Consensus &amp; Votes"));
    }

    #[test]
    fn test_proposal_page_share_link() {
        let html = proposal_page(
            &sample_record(),
            "0052-consensus-votes",
            "Solana SIMD",
            "https://solana.com",
            None,
            None,
        );
        assert!(html.contains("twitter.com/intent/tweet"));
        assert!(html.contains("Back to SIMD"));
    }

    #[test]
    fn test_proposal_page_missing_content_fallback() {
        let mut record = sample_record();
        record.content = None;
        let html = proposal_page(
            &record,
            "0052-consensus-votes",
            "Solana SIMD",
            "https://solana.com",
            None,
            None,
        );
        assert!(html.contains("[unable to fetch SIMD proposal]"));
    }

    #[test]
    fn test_proposal_page_next_prev() {
        let prev = PageLink {
            href: "0051-older".to_string(),
            label: "Previous SIMD".to_string(),
        };
        let next = PageLink {
            href: "0053-newer".to_string(),
            label: "Next SIMD".to_string(),
        };
        let html = proposal_page(
            &sample_record(),
            "0052-consensus-votes",
            "Solana SIMD",
            "https://solana.com",
            Some(&prev),
            Some(&next),
        );
        assert!(html.contains(r#"href="/simd/0051-older""#));
        assert!(html.contains(r#"href="/simd/0053-newer""#));
    }

    #[test]
    fn test_proposal_index_rows() {
        let record = sample_record();
        let html = proposal_index(&[("0052-consensus-votes", &record)], "Solana SIMD");
        assert!(html.contains(r#"<a href="/simd/0052-consensus-votes">"#));
        assert!(html.contains("#0052"));
        assert!(html.contains("Draft"));
    }

    #[test]
    fn test_not_found_page() {
        let html = not_found_page("Solana SIMD");
        assert!(html.contains("Proposal not found"));
    }
}
