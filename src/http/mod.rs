//! HTTP transport module
//!
//! Performs a single authenticated request and decodes its JSON body.
//!
//! # Features
//!
//! - **Fixed Timeout**: every request is bounded by the configured timeout
//! - **Authentication**: the access token is appended to a copy of the URL
//! - **Typed Decoding**: bodies decode straight into the caller's type
//! - **Header Passthrough**: response headers are returned for pagination

mod client;

pub use client::HttpClient;
