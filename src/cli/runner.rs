//! CLI runner - executes commands

use crate::auth::AccessToken;
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::Client;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::tilesets::ListTilesetsParams;
use serde::Serialize;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = Client::with_config(self.resolve_config()?)?;

        match &self.cli.command {
            Commands::Styles { draft } => {
                let styles = client.list_styles(*draft).await?;
                info!("Fetched {} styles", styles.len());
                self.emit(&styles)
            }
            Commands::Style { id, draft } => {
                let style = client.get_style(id, *draft).await?;
                self.emit(&style)
            }
            Commands::Tilesets {
                tileset_type,
                visibility,
                sort_by,
                limit,
            } => {
                let params = ListTilesetsParams {
                    tileset_type: *tileset_type,
                    visibility: *visibility,
                    sort_by: *sort_by,
                    limit: *limit,
                };
                let tilesets = client.list_tilesets(&params).await?;
                info!("Fetched {} tilesets", tilesets.len());
                self.emit(&tilesets)
            }
            Commands::Tilejson { ids } => {
                let tilejson = client.get_tilejson(ids).await?;
                self.emit(&tilejson)
            }
        }
    }

    /// Merge the profile file with command-line values
    pub fn resolve_config(&self) -> Result<ClientConfig> {
        let file = match &self.cli.config {
            Some(path) => Some(ClientConfig::from_file(path)?),
            None => None,
        };

        let username = self
            .cli
            .username
            .clone()
            .or_else(|| file.as_ref().map(|c| c.username.clone()))
            .ok_or_else(|| Error::missing_field("username (use --username or MAPBOX_USERNAME)"))?;

        let access_token = match (&self.cli.access_token, &file) {
            (Some(token), _) => AccessToken::new(token.clone()),
            (None, Some(c)) => c.access_token.clone(),
            (None, None) => {
                return Err(Error::missing_field(
                    "access_token (use --access-token or MAPBOX_ACCESS_TOKEN)",
                ))
            }
        };

        let mut builder = ClientConfig::builder(username, access_token);
        if let Some(c) = &file {
            builder = builder
                .timeout(c.timeout)
                .user_agent(c.user_agent.clone())
                .base_url(c.base_url.as_str());
        }
        if let Some(url) = &self.cli.base_url {
            builder = builder.base_url(url.as_str());
        }
        builder.build()
    }

    /// Print a value to stdout in the selected format
    fn emit<T: Serialize>(&self, value: &T) -> Result<()> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value),
            OutputFormat::Pretty => serde_json::to_string_pretty(value),
        }
        .map_err(|e| Error::config(format!("rendering output: {e}")))?;

        println!("{rendered}");
        Ok(())
    }
}
