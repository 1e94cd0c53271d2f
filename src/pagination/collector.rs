//! Paginated collector
//!
//! Follows next links until the server stops sending them and concatenates
//! every page into one `Vec`.

use super::types::NextPage;
use crate::error::Result;
use crate::http::HttpClient;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// Fetch `initial` and every page after it, preserving server order.
///
/// Each page must decode as a JSON array of `T`. Any failed page fails the
/// whole collection; items gathered from earlier pages are dropped.
pub async fn collect_pages<T: DeserializeOwned>(http: &HttpClient, initial: Url) -> Result<Vec<T>> {
    let mut items = Vec::new();
    let mut pages = 0usize;
    let mut next = NextPage::Continue(initial);

    while let NextPage::Continue(url) = next {
        let (headers, page): (_, Vec<T>) = http.get_json(&url).await?;
        pages += 1;
        debug!("Page {} from {}: {} items", pages, url, page.len());

        items.extend(page);
        next = NextPage::from_headers(&headers);
    }

    debug!("Collected {} items across {} pages", items.len(), pages);
    Ok(items)
}
