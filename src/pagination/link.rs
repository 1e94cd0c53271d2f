//! Link header cursor extraction
//!
//! Format: `Link: <https://api.mapbox.com/styles/v1/alice?start=abc>; rel="next"`
//!
//! This is a textual extraction, not a full RFC 5988 parser: a header that
//! mentions `next` anywhere yields the first bracketed URL it contains.

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::{HeaderMap, LINK};
use tracing::warn;
use url::Url;

static BRACKETED_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<([^>]*)>").expect("static regex is valid"));

/// Find the URL of the next page in the response headers.
///
/// Returns `None` when there is no `Link` header, when it has no `next`
/// relation, or when the link cannot be parsed. A malformed link ends
/// pagination instead of failing the listing.
pub fn next_page_url(headers: &HeaderMap) -> Option<Url> {
    let link = headers.get(LINK)?;
    let Ok(link) = link.to_str() else {
        warn!("Ignoring non-ASCII Link header, treating as last page");
        return None;
    };

    if !link.contains("next") {
        return None;
    }

    let Some(candidate) = BRACKETED_URL.captures(link).and_then(|c| c.get(1)) else {
        warn!("Link header mentions next but has no <url>, treating as last page: {link}");
        return None;
    };

    match Url::parse(candidate.as_str()) {
        Ok(url) => Some(url),
        Err(e) => {
            warn!(
                "Unparsable next link '{}' ({e}), treating as last page",
                candidate.as_str()
            );
            None
        }
    }
}
