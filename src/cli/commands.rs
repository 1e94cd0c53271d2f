//! CLI commands and argument parsing

use crate::tilesets::{SortBy, TilesetType};
use crate::types::Visibility;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mapbox styles and tilesets CLI
#[derive(Parser, Debug)]
#[command(name = "mapbox-client")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Account username
    #[arg(short, long, global = true, env = "MAPBOX_USERNAME")]
    pub username: Option<String>,

    /// Access token
    #[arg(long, global = true, env = "MAPBOX_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Service root URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Profile file (YAML); command-line values override it
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all styles
    Styles {
        /// List draft versions
        #[arg(long)]
        draft: bool,
    },

    /// Fetch a style document
    Style {
        /// Style ID
        id: String,

        /// Fetch the draft version
        #[arg(long)]
        draft: bool,
    },

    /// List all tilesets
    Tilesets {
        /// Only vector or raster tilesets
        #[arg(long = "type")]
        tileset_type: Option<TilesetType>,

        /// Only public or private tilesets
        #[arg(long)]
        visibility: Option<Visibility>,

        /// Sort by created or modified
        #[arg(long)]
        sort_by: Option<SortBy>,

        /// Page size
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Fetch TileJSON for one or more tilesets
    Tilejson {
        /// Tileset IDs
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON
    Json,
    /// Indented JSON
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tilesets() {
        let cli = Cli::try_parse_from([
            "mapbox-client",
            "--username",
            "alice",
            "--access-token",
            "pk.test",
            "tilesets",
            "--type",
            "vector",
            "--sort-by",
            "modified",
            "--limit",
            "10",
        ])
        .unwrap();

        assert_eq!(cli.username.as_deref(), Some("alice"));
        match cli.command {
            Commands::Tilesets {
                tileset_type,
                visibility,
                sort_by,
                limit,
            } => {
                assert_eq!(tileset_type, Some(TilesetType::Vector));
                assert!(visibility.is_none());
                assert_eq!(sort_by, Some(SortBy::Modified));
                assert_eq!(limit, Some(10));
            }
            other => panic!("Expected Tilesets, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_style_with_global_flags_after() {
        let cli = Cli::try_parse_from(["mapbox-client", "style", "cjs9", "--draft", "-f", "pretty"])
            .unwrap();

        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(matches!(cli.command, Commands::Style { ref id, draft: true } if id == "cjs9"));
    }

    #[test]
    fn test_parse_tilejson_requires_ids() {
        assert!(Cli::try_parse_from(["mapbox-client", "tilejson"]).is_err());

        let cli = Cli::try_parse_from(["mapbox-client", "tilejson", "a", "b"]).unwrap();
        assert!(matches!(cli.command, Commands::Tilejson { ref ids } if ids == &["a", "b"]));
    }

    #[test]
    fn test_parse_rejects_unknown_visibility() {
        assert!(
            Cli::try_parse_from(["mapbox-client", "tilesets", "--visibility", "secret"]).is_err()
        );
    }
}
