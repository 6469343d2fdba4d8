use std::borrow::Borrow;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A URI as it appears on the wire.
///
/// No parsing or normalization is applied: the string is carried verbatim so
/// that values outside any known vocabulary survive a read/write cycle
/// unchanged, malformed or not.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct Uri(String);

impl Uri {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Uri {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Uri {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Uri {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Uri {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Uri {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_plain_string() {
        let uri = Uri::from("http://gedcomx.org/Create");
        let json = serde_json::to_string(&uri).unwrap();
        assert_eq!(json, "\"http://gedcomx.org/Create\"");
        let recovered: Uri = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, uri);
    }

    #[test]
    fn keeps_malformed_values_verbatim() {
        let uri = Uri::new("not a uri at all ::");
        assert_eq!(uri.as_str(), "not a uri at all ::");
        assert_eq!(uri.to_string(), "not a uri at all ::");
    }

    #[test]
    fn compares_against_str() {
        let uri = Uri::from("urn:x");
        assert_eq!(uri, "urn:x");
        assert!(!uri.is_empty());
        assert!(Uri::default().is_empty());
    }
}
