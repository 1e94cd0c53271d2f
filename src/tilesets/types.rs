//! Tileset documents and listing parameters

use crate::error::Error;
use crate::types::{Timestamp, Visibility};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Filters
// ============================================================================

/// Data type of a tileset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TilesetType {
    Vector,
    Raster,
}

impl TilesetType {
    /// Wire name of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vector => "vector",
            Self::Raster => "raster",
        }
    }
}

impl fmt::Display for TilesetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TilesetType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vector" => Ok(Self::Vector),
            "raster" => Ok(Self::Raster),
            other => Err(Error::config(format!(
                "unknown tileset type '{other}', expected vector or raster"
            ))),
        }
    }
}

/// Sort order for tileset listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Oldest first
    Created,
    /// Most recently modified first
    Modified,
}

impl SortBy {
    /// Wire name of the sort order
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Modified => "modified",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "created" => Ok(Self::Created),
            "modified" => Ok(Self::Modified),
            other => Err(Error::config(format!(
                "unknown sort order '{other}', expected created or modified"
            ))),
        }
    }
}

/// Optional filters for listing tilesets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListTilesetsParams {
    pub tileset_type: Option<TilesetType>,
    pub visibility: Option<Visibility>,
    pub sort_by: Option<SortBy>,
    /// Page size requested from the service
    pub limit: Option<u32>,
}

impl ListTilesetsParams {
    /// No filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Only list tilesets of this type
    #[must_use]
    pub fn tileset_type(mut self, tileset_type: TilesetType) -> Self {
        self.tileset_type = Some(tileset_type);
        self
    }

    /// Only list tilesets with this visibility
    #[must_use]
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Set the sort order
    #[must_use]
    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    /// Set the page size
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query pairs for the filters that are set, in a stable order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(t) = self.tileset_type {
            pairs.push(("type", t.as_str().to_string()));
        }
        if let Some(v) = self.visibility {
            pairs.push(("visibility", v.as_str().to_string()));
        }
        if let Some(s) = self.sort_by {
            pairs.push(("sortby", s.as_str().to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

// ============================================================================
// Documents
// ============================================================================

/// Tileset summary returned when listing tilesets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tileset {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub tileset_type: Option<TilesetType>,
    /// `[longitude, latitude, zoom]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<[f64; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Storage size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filesize: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    /// Processing status, e.g. `available` or `pending`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// TileJSON metadata describing how to fetch tiles for one or more tilesets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TileJson {
    /// `[west, south, east, north]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<[f64; 4]>,
    /// `[longitude, latitude, zoom]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<[f64; 3]>,
    /// Creation time in milliseconds since the epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minzoom: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxzoom: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `xyz` or `tms`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    /// TileJSON spec version
    #[serde(
        default,
        alias = "tile_json",
        skip_serializing_if = "Option::is_none"
    )]
    pub tilejson: Option<String>,
    /// Tile URL templates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_layers: Option<Vec<VectorLayer>>,
}

/// Schema of one layer in a vector tileset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorLayer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Attribute name to type description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxzoom: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minzoom: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
}
