// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]

//! # Mapbox Client
//!
//! A Rust client for the Mapbox styles and tilesets metadata APIs.
//!
//! ## Features
//!
//! - **Token Authentication**: the access token is added to a copy of each request URL
//! - **Typed Documents**: styles, tilesets and TileJSON decode into typed structs
//!   where absent fields stay `None`
//! - **Link Header Pagination**: listings follow `rel="next"` links until exhausted
//! - **Staged Errors**: every error says whether it happened while building,
//!   sending or decoding a request
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mapbox_client::{Client, ListTilesetsParams, Result, TilesetType};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new("alice", std::env::var("MAPBOX_ACCESS_TOKEN").unwrap())?;
//!
//!     for style in client.list_styles(false).await? {
//!         println!("{:?} {:?}", style.id, style.name);
//!     }
//!
//!     let params = ListTilesetsParams::new().tileset_type(TilesetType::Vector);
//!     let tilesets = client.list_tilesets(&params).await?;
//!
//!     let tilejson = client.get_tilejson(&["mapbox.mapbox-streets-v8"]).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          Client                             │
//! │  list_styles  get_style  list_tilesets  get_tilejson        │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┴──────┬────────────────────────┐
//! │     Auth     │        HTTP         │       Pagination       │
//! ├──────────────┼─────────────────────┼────────────────────────┤
//! │ access_token │ GET + JSON decode   │ Link rel="next"        │
//! │ query param  │ fixed timeout       │ sequential collector   │
//! └──────────────┴─────────────────────┴────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Access token handling
pub mod auth;

/// Client configuration
pub mod config;

/// HTTP transport
pub mod http;

/// Link header pagination
pub mod pagination;

/// The configured service client
pub mod client;

/// Styles API
pub mod styles;

/// Tilesets API
pub mod tilesets;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, ErrorKind, Result};
pub use styles::{Light, ListStyle, Style, Transition};
pub use tilesets::{ListTilesetsParams, SortBy, TileJson, Tileset, TilesetType, VectorLayer};
pub use types::Visibility;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
