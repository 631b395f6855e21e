//! Request handlers for the preview server.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::render;
use crate::site::ProposalPage;

use super::AppState;

/// Proposal index page.
pub async fn proposal_index(State(state): State<AppState>) -> Html<String> {
    let pairs: Vec<(&str, &crate::models::ProposalRecord)> = state
        .content
        .pages()
        .iter()
        .map(|p: &ProposalPage| (p.slug.as_str(), &p.record))
        .collect();

    Html(render::proposal_index(&pairs, &state.site_name))
}

/// Single proposal page; unknown slugs get a 404.
pub async fn proposal_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Response {
    let Some(page) = state.content.page(&slug) else {
        return (
            StatusCode::NOT_FOUND,
            Html(render::not_found_page(&state.site_name)),
        )
            .into_response();
    };

    let (prev, next) = state.content.neighbors(&slug);
    let html = render::proposal_page(
        &page.record,
        &page.slug,
        &state.site_name,
        &state.base_url,
        prev.map(ProposalPage::nav_link).as_ref(),
        next.map(ProposalPage::nav_link).as_ref(),
    );

    Html(html).into_response()
}

/// Catch-all 404.
pub async fn not_found(State(state): State<AppState>) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(render::not_found_page(&state.site_name)),
    )
        .into_response()
}

/// Serve CSS.
pub async fn serve_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], render::CSS)
}

/// Serve JavaScript.
pub async fn serve_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        render::JS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::config::Settings;
    use crate::models::{ProposalMetadata, ProposalRecord};
    use crate::server::create_router;
    use crate::site::SiteContent;

    fn record(simd: &str, title: &str) -> ProposalRecord {
        ProposalRecord {
            metadata: ProposalMetadata {
                simd: Some(simd.to_string()),
                title: Some(title.to_string()),
                status: Some("Draft".to_string()),
                ..Default::default()
            },
            content: Some(format!("<p>{} body</p>", title)),
            ..Default::default()
        }
    }

    fn test_app() -> axum::Router {
        let content = SiteContent::from_records(vec![
            record("1", "First Proposal"),
            record("2", "Second Proposal"),
        ]);
        let state = AppState::new(content, &Settings::default());
        create_router(state)
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_index_lists_proposals() {
        let app = test_app();

        let response = app
            .oneshot(Request::builder().uri("/simd").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("First Proposal"));
        assert!(html.contains(r#"href="/simd/0002-second-proposal""#));
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let app = test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("<!DOCTYPE html>"));
    }

    #[tokio::test]
    async fn test_proposal_page() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/simd/0001-first-proposal")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("<p>First Proposal body</p>"));
        assert!(html.contains("Status: Draft"));
        // Next link points at the only neighbor
        assert!(html.contains("0002-second-proposal"));
    }

    #[tokio::test]
    async fn test_unknown_slug_is_404() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/simd/9999-missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = body_string(response).await;
        assert!(html.contains("Proposal not found"));
    }

    #[tokio::test]
    async fn test_fallback_is_404() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/nope/nothing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_static_css() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/static/style.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get("content-type")
            .map(|v| v.to_str().unwrap_or(""));
        assert!(content_type.unwrap_or("").contains("css"));
    }

    #[tokio::test]
    async fn test_static_js() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/static/page.js")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
