//! Tilesets API
//!
//! - `GET /tilesets/v1/{username}` lists tileset summaries (paginated)
//! - `GET /v4/{id1,id2,...}.json` fetches combined TileJSON metadata
//!
//! See <https://docs.mapbox.com/api/maps/mapbox-tiling-service/>.

mod types;

pub use types::{ListTilesetsParams, SortBy, TileJson, Tileset, TilesetType, VectorLayer};

use crate::client::Client;
use crate::error::{Error, Result, ResultExt};
use crate::pagination::collect_pages;
use tracing::debug;

impl Client {
    /// List every tileset owned by the account, following pagination.
    ///
    /// Unset filters are left out of the query entirely.
    pub async fn list_tilesets(&self, params: &ListTilesetsParams) -> Result<Vec<Tileset>> {
        let url = self.endpoint(&["tilesets", "v1", self.username()], &params.query_pairs())?;

        let tilesets: Vec<Tileset> = collect_pages(self.http(), url)
            .await
            .context("making request")?;
        debug!("Listed {} tilesets for {}", tilesets.len(), self.username());
        Ok(tilesets)
    }

    /// Fetch the TileJSON document for one or more tilesets.
    ///
    /// Several IDs are combined into one composited document by the service.
    pub async fn get_tilejson<S: AsRef<str>>(&self, tileset_ids: &[S]) -> Result<TileJson> {
        if tileset_ids.is_empty() {
            return Err(Error::config("at least one tileset id is required"));
        }

        let ids: Vec<&str> = tileset_ids.iter().map(|id| id.as_ref()).collect();
        let file = format!("{}.json", ids.join(","));
        let url = self.endpoint(&["v4", file.as_str()], &[])?;

        let (_, metadata) = self.http().get_json(&url).await?;
        Ok(metadata)
    }
}
