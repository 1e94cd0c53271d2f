//! HTTP client
//!
//! Wraps a `reqwest::Client` with the account's authenticator. One request
//! in, one decoded body and its headers out; no retries.

use crate::auth::Authenticator;
use crate::config::ClientConfig;
use crate::error::{
    Error, Result, STAGE_CREATING_CLIENT, STAGE_CREATING_REQUEST, STAGE_REQUESTING,
};
use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Authenticated JSON transport
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    authenticator: Authenticator,
    timeout: Duration,
}

impl HttpClient {
    /// Create a transport from the client configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::request(STAGE_CREATING_CLIENT, e))?;

        Ok(Self {
            client,
            authenticator: Authenticator::new(config.access_token.clone()),
            timeout: config.timeout,
        })
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send one authenticated request and decode the JSON response into `T`.
    ///
    /// `url` is the unsigned URL; the token is added to a copy just before
    /// sending. The body is read to the end before decoding, so the connection
    /// is released whether or not decoding succeeds.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &Url,
        body: Option<&Value>,
    ) -> Result<(HeaderMap, T)> {
        let signed = self.authenticator.authenticate(url);

        let mut req = self.client.request(method.clone(), signed);
        if let Some(body) = body {
            req = req.json(body);
        }
        let req = req
            .build()
            .map_err(|e| Error::request(STAGE_CREATING_REQUEST, e))?;

        let response = self.client.execute(req).await.map_err(|e| {
            // reqwest embeds the URL in its errors; keep the token out of them
            Error::request(STAGE_REQUESTING, e.without_url())
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        debug!("{} {} -> {}", method, url, status.as_u16());

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::request(STAGE_REQUESTING, e.without_url()))?;

        if !status.is_success() {
            return Err(Error::http_status(
                status.as_u16(),
                String::from_utf8_lossy(&bytes).into_owned(),
            ));
        }

        let value = serde_json::from_slice(&bytes).map_err(Error::decode)?;
        Ok((headers, value))
    }

    /// Make a GET request and decode the JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<(HeaderMap, T)> {
        self.execute(Method::GET, url, None).await
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
