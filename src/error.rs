//! Error types for the Mapbox client
//!
//! Every public operation returns `Result<T, Error>`. Errors carry the stage
//! that produced them ("creating request", "requesting", "decoding json") so a
//! failure deep inside a paginated listing still says where it happened.

use thiserror::Error;

/// Stage label for building the underlying HTTP client
pub const STAGE_CREATING_CLIENT: &str = "creating client";
/// Stage label for assembling a request
pub const STAGE_CREATING_REQUEST: &str = "creating request";
/// Stage label for sending a request and reading its body
pub const STAGE_REQUESTING: &str = "requesting";
/// Stage label for decoding a response body
pub const STAGE_DECODING: &str = "decoding json";

/// The main error type for the Mapbox client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Construction Errors
    // ============================================================================
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Cannot build request URL: {message}")]
    UrlConstruction { message: String },

    // ============================================================================
    // Request Errors
    // ============================================================================
    #[error("{stage}: {source}")]
    Request {
        stage: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("{stage}: {source}")]
    Decode {
        stage: &'static str,
        #[source]
        source: serde_json::Error,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Wrapped Errors
    // ============================================================================
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

/// Broad classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A request URL could not be assembled
    Construction,
    /// The request failed in transit or the server answered with a non-success status
    Request,
    /// The response body did not match the expected shape
    Decode,
    /// The client was misconfigured
    Config,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Wrap a transport error with the stage that produced it
    pub fn request(stage: &'static str, source: reqwest::Error) -> Self {
        Self::Request { stage, source }
    }

    /// Wrap a JSON error with the decoding stage
    pub fn decode(source: serde_json::Error) -> Self {
        Self::Decode {
            stage: STAGE_DECODING,
            source,
        }
    }

    /// Classify this error, looking through any context wrappers
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidUrl(_) | Error::UrlConstruction { .. } => ErrorKind::Construction,
            Error::Request { .. } | Error::HttpStatus { .. } => ErrorKind::Request,
            Error::Decode { .. } => ErrorKind::Decode,
            Error::Config { .. }
            | Error::MissingConfigField { .. }
            | Error::YamlParse(_)
            | Error::Io(_) => ErrorKind::Config,
            Error::Context { source, .. } => source.kind(),
        }
    }

    /// Check whether the request timed out
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Request { source, .. } => source.is_timeout(),
            Error::Context { source, .. } => source.is_timeout(),
            _ => false,
        }
    }
}

/// Result type alias for the Mapbox client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Context {
            context: message.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| Error::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
