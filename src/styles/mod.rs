//! Styles API
//!
//! - `GET /styles/v1/{username}?draft=` lists style summaries (paginated)
//! - `GET /styles/v1/{username}/{style_id}[/draft]` fetches one style document
//!
//! See <https://docs.mapbox.com/api/maps/styles/>.

mod types;

pub use types::{Light, ListStyle, Style, Transition};

use crate::client::Client;
use crate::error::{Error, Result, ResultExt};
use crate::pagination::collect_pages;
use tracing::debug;

impl Client {
    /// List every style owned by the account, following pagination.
    ///
    /// `draft` selects draft or published versions of the styles.
    pub async fn list_styles(&self, draft: bool) -> Result<Vec<ListStyle>> {
        let url = self.endpoint(
            &["styles", "v1", self.username()],
            &[("draft", draft.to_string())],
        )?;

        let styles: Vec<ListStyle> = collect_pages(self.http(), url)
            .await
            .context("making request")?;
        debug!("Listed {} styles for {}", styles.len(), self.username());
        Ok(styles)
    }

    /// Fetch a single style document, optionally its draft version
    pub async fn get_style(&self, style_id: &str, draft: bool) -> Result<Style> {
        if style_id.is_empty() {
            return Err(Error::config("style id must not be empty"));
        }

        let mut segments = vec!["styles", "v1", self.username(), style_id];
        if draft {
            segments.push("draft");
        }
        let url = self.endpoint(&segments, &[])?;

        let (_, style) = self
            .http()
            .get_json(&url)
            .await
            .context("making request")?;
        Ok(style)
    }
}
