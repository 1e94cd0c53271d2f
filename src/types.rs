//! Common types shared by the style and tileset APIs

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// Uninterpreted JSON document value, passed through unchanged
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Timestamp as returned by the service (RFC 3339)
pub type Timestamp = chrono::DateTime<chrono::Utc>;

// ============================================================================
// Visibility
// ============================================================================

/// Access control for a style or tileset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Readable with any account's token
    Public,
    /// Readable only with the owner's token
    Private,
}

impl Visibility {
    /// Wire name of the visibility
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            other => Err(Error::config(format!(
                "unknown visibility '{other}', expected public or private"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_names() {
        assert_eq!(Visibility::Public.as_str(), "public");
        assert_eq!(Visibility::Private.to_string(), "private");
        assert_eq!("PUBLIC".parse::<Visibility>().unwrap(), Visibility::Public);
        assert!("secret".parse::<Visibility>().is_err());
    }

    #[test]
    fn test_visibility_serde() {
        let v: Visibility = serde_json::from_str("\"private\"").unwrap();
        assert_eq!(v, Visibility::Private);
        assert_eq!(serde_json::to_string(&Visibility::Public).unwrap(), "\"public\"");
    }
}
