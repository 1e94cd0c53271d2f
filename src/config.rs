//! Client configuration
//!
//! A `ClientConfig` is built once and never changes afterwards. It can be
//! assembled in code through the builder or loaded from a YAML profile:
//!
//! ```yaml
//! username: alice
//! access_token: pk.eyJ1Ijo...
//! base_url: https://api.mapbox.com   # optional
//! timeout_secs: 15                   # optional
//! ```

use crate::auth::AccessToken;
use crate::error::{Error, Result, ResultExt};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default service root
pub const DEFAULT_BASE_URL: &str = "https://api.mapbox.com";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Configuration shared by every request a client issues
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Account the style and tileset listings belong to
    pub username: String,
    /// Access token appended to every request
    pub access_token: AccessToken,
    /// Service root; request paths are appended to a copy of it
    pub base_url: Url,
    /// Per-request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a config with default base URL and timeout
    pub fn new(username: impl Into<String>, access_token: impl Into<AccessToken>) -> Result<Self> {
        Self::builder(username, access_token).build()
    }

    /// Create a new config builder
    pub fn builder(
        username: impl Into<String>,
        access_token: impl Into<AccessToken>,
    ) -> ClientConfigBuilder {
        ClientConfigBuilder {
            username: username.into(),
            access_token: access_token.into(),
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }

    /// Parse a YAML profile
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(yaml)?;
        file.into_builder().build()
    }

    /// Load a YAML profile from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_yaml_str(&contents).with_context(|| format!("loading {}", path.display()))
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug)]
pub struct ClientConfigBuilder {
    username: String,
    access_token: AccessToken,
    base_url: Option<String>,
    timeout: Duration,
    user_agent: String,
}

impl ClientConfigBuilder {
    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Validate and build the config
    pub fn build(self) -> Result<ClientConfig> {
        if self.username.trim().is_empty() {
            return Err(Error::missing_field("username"));
        }
        if self.access_token.is_empty() {
            return Err(Error::missing_field("access_token"));
        }
        if self.timeout.is_zero() {
            return Err(Error::config("timeout must be greater than zero"));
        }

        let base_url = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "base URL '{base_url}' cannot carry a path"
            )));
        }

        Ok(ClientConfig {
            username: self.username,
            access_token: self.access_token,
            base_url,
            timeout: self.timeout,
            user_agent: self.user_agent,
        })
    }
}

/// On-disk profile layout
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    username: String,
    access_token: AccessToken,
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    timeout_secs: Option<u64>,
    #[serde(default)]
    user_agent: Option<String>,
}

impl ConfigFile {
    fn into_builder(self) -> ClientConfigBuilder {
        let mut builder = ClientConfig::builder(self.username, self.access_token);
        if let Some(url) = self.base_url {
            builder = builder.base_url(url);
        }
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }
        builder
    }
}

fn default_user_agent() -> String {
    format!("mapbox-client/{}", env!("CARGO_PKG_VERSION"))
}
