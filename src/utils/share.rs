//! Social share URL construction.

use url::Url;

/// Build a tweet-intent URL sharing a page on the site.
///
/// `href` is the site-relative page path (e.g. `/simd/0052-...`); it is
/// resolved against `base_url` so shared links are absolute.
pub fn share_on_twitter_url(base_url: &str, href: &str, message: &str) -> String {
    let page_url = Url::parse(base_url)
        .and_then(|base| base.join(href))
        .map(String::from)
        .unwrap_or_else(|_| format!("{}{}", base_url.trim_end_matches('/'), href));

    format!(
        "https://twitter.com/intent/tweet?text={}&url={}",
        urlencoding::encode(message),
        urlencoding::encode(&page_url),
    )
}
