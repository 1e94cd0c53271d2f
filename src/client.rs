//! The configured service client
//!
//! `Client` holds the immutable configuration and the transport. All
//! operations take `&self`, so one client can serve many concurrent callers.
//! The endpoint methods live next to their schemas in [`crate::styles`] and
//! [`crate::tilesets`].

use crate::auth::AccessToken;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use url::Url;

/// Client for the styles and tilesets APIs of one account
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
    http: HttpClient,
}

impl Client {
    /// Create a client with the default base URL and timeout
    pub fn new(username: impl Into<String>, access_token: impl Into<AccessToken>) -> Result<Self> {
        Self::with_config(ClientConfig::new(username, access_token)?)
    }

    /// Create a client from a full configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = HttpClient::new(&config)?;
        Ok(Self { config, http })
    }

    /// The account this client lists resources for
    pub fn username(&self) -> &str {
        &self.config.username
    }

    /// The unauthenticated service root
    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// The client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The transport used for every request
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Build an unauthenticated request URL from a copy of the base URL.
    ///
    /// Segments are percent-encoded individually. The query string is only
    /// touched when there are pairs to add.
    pub fn endpoint(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::UrlConstruction {
                message: format!("base URL '{}' cannot carry a path", self.config.base_url),
            })?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> Client {
        let config = ClientConfig::builder("alice", "pk.test")
            .base_url(base)
            .build()
            .unwrap();
        Client::with_config(config).unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let client = client("https://api.mapbox.com");
        let url = client.endpoint(&["styles", "v1", "alice"], &[]).unwrap();
        assert_eq!(url.as_str(), "https://api.mapbox.com/styles/v1/alice");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = client("http://localhost:8080/proxy/");
        let url = client
            .endpoint(&["tilesets", "v1", "alice"], &[("limit", "5".to_string())])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/proxy/tilesets/v1/alice?limit=5"
        );
    }

    #[test]
    fn test_endpoint_does_not_touch_base_url() {
        let client = client("https://api.mapbox.com");
        let _ = client
            .endpoint(&["styles", "v1", "alice"], &[("draft", "true".to_string())])
            .unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.mapbox.com/");
        assert!(client.base_url().query().is_none());
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let client = client("https://api.mapbox.com");
        let url = client.endpoint(&["styles", "v1", "a/b c"], &[]).unwrap();
        assert_eq!(url.path(), "/styles/v1/a%2Fb%20c");
    }

    #[test]
    fn test_client_accessors() {
        let client = Client::new("alice", "pk.test").unwrap();
        assert_eq!(client.username(), "alice");
        assert_eq!(client.config().timeout, std::time::Duration::from_secs(15));
        assert!(!format!("{client:?}").contains("pk.test"));
    }

    #[test]
    fn test_client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }
}
