//! Authentication module
//!
//! Mapbox authenticates every request with an `access_token` query parameter.
//! The `Authenticator` derives a signed copy of a request URL; the unsigned
//! URL is what gets stored and logged.

mod authenticator;
mod types;

pub use authenticator::{Authenticator, ACCESS_TOKEN_PARAM};
pub use types::AccessToken;
