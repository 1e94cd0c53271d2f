//! Authenticator implementation
//!
//! Signs request URLs with the account's access token.

use super::types::AccessToken;
use url::Url;

/// Query parameter the service reads the credential from
pub const ACCESS_TOKEN_PARAM: &str = "access_token";

/// Authenticator appends the access token to outgoing request URLs
#[derive(Debug, Clone)]
pub struct Authenticator {
    token: AccessToken,
}

impl Authenticator {
    /// Create a new authenticator for the given token
    pub fn new(token: AccessToken) -> Self {
        Self { token }
    }

    /// Return a copy of `url` with `access_token` appended to its query string.
    ///
    /// Existing parameters are left exactly as they were. The parameter is
    /// added, not replaced, so this must be applied once per request.
    pub fn authenticate(&self, url: &Url) -> Url {
        let mut signed = url.clone();
        signed
            .query_pairs_mut()
            .append_pair(ACCESS_TOKEN_PARAM, self.token.expose());
        signed
    }
}
